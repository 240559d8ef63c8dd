use super::*;
use crate::config::VariationConfig;
use crate::error::VariationError;
use crate::extract::{Defaults, FnExtractor};
use crate::value::{Element, Scalar};

fn defaults() -> VariationConfig {
    VariationConfig::default()
}

// ============================================================================
// Repetition / retrograde
// ============================================================================

#[test]
fn test_repetition_finds_exact_windows() {
    let found = repetition(&[1i32, 2, 3], &[0, 1, 2, 3, 4, 2, 3, 4], &Defaults).unwrap();
    assert_eq!(found, vec![1]);
}

#[test]
fn test_repetition_compares_aux() {
    let pattern = [(1i32, 'a'), (2, 'b')];
    let sequence = [(1, 'a'), (2, 'x'), (1, 'a'), (2, 'b')];
    assert_eq!(repetition(&pattern, &sequence, &Defaults).unwrap(), vec![2]);
}

#[test]
fn test_repetition_overlapping_matches() {
    let found = repetition(&[7i32, 7], &[7, 7, 7], &Defaults).unwrap();
    assert_eq!(found, vec![0, 1]);
}

#[test]
fn test_retrograde() {
    let found = retrograde(&[1i32, 2, 3], &[3, 2, 1, 9, 3, 2, 1], &Defaults, &defaults()).unwrap();
    assert_eq!(found, vec![0, 4]);
}

#[test]
fn test_palindrome_is_repetition_and_retrograde() {
    let pattern = [1i32, 2, 1];
    let sequence = [5, 1, 2, 1];
    assert_eq!(repetition(&pattern, &sequence, &Defaults).unwrap(), vec![1]);
    assert_eq!(
        retrograde(&pattern, &sequence, &Defaults, &defaults()).unwrap(),
        vec![1]
    );
}

#[test]
fn test_retrograde_aux_can_be_ignored() {
    let pattern = [(1i32, 'a'), (2, 'b')];
    let sequence = [(2, 'z'), (1, 'z')];
    let strict = retrograde(&pattern, &sequence, &Defaults, &defaults()).unwrap();
    assert!(strict.is_empty());
    let loose_config = defaults().with_same_aux(false);
    let loose = retrograde(&pattern, &sequence, &Defaults, &loose_config).unwrap();
    assert_eq!(loose, vec![0]);
}

// ============================================================================
// Transposition / inversion
// ============================================================================

#[test]
fn test_transposition_reports_every_offset() {
    let sequence = [0, 1, 2, 3, 4, 2, 3, 4];
    let found = transposition(&[1i32, 2, 3], &sequence, &Defaults, &defaults()).unwrap();
    let got: Vec<(usize, i32)> = found.iter().map(|t| (t.position, t.offset)).collect();
    assert_eq!(got, vec![(0, -1), (1, 0), (2, 1), (5, 1)]);
}

#[test]
fn test_transposition_with_durations() {
    let pattern = [(60i32, "q"), (62, "e"), (64, "e")];
    let sequence = [(62, "q"), (64, "e"), (66, "e")];
    let found = transposition(&pattern, &sequence, &Defaults, &defaults()).unwrap();
    assert_eq!(
        found,
        vec![Transposition {
            position: 0,
            offset: 2
        }]
    );

    let rhythm_changed = [(62, "q"), (64, "q"), (66, "e")];
    assert!(transposition(&pattern, &rhythm_changed, &Defaults, &defaults())
        .unwrap()
        .is_empty());
    let loose = defaults().with_same_aux(false);
    assert_eq!(
        transposition(&pattern, &rhythm_changed, &Defaults, &loose)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_transposition_exact_ratios() {
    let pattern = [Scalar::from(crate::value::ratio(1, 2)), Scalar::Int(1)];
    let sequence = [Scalar::Int(1), Scalar::from(crate::value::ratio(3, 2))];
    let found = transposition(&pattern, &sequence, &Defaults, &defaults()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].offset, Scalar::from(crate::value::ratio(1, 2)));
}

#[test]
fn test_inversion_whole_step_axis() {
    let found = inversion(&[60i32, 62, 64], &[60, 58, 56], &Defaults, &defaults()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].position, 0);
    assert_eq!(found[0].axis.to_f64(), Some(60.0));
}

#[test]
fn test_inversion_half_step_axis_stays_exact() {
    let found = inversion(&[60i32, 62, 64], &[0, 61, 59, 57], &Defaults, &defaults()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].position, 1);
    assert_eq!(*found[0].axis.twice(), 121);
    assert_eq!(found[0].axis.to_f64(), Some(60.5));
    assert_eq!(found[0].axis.reflect(&64).unwrap(), 57);
}

#[test]
fn test_inversion_requires_same_aux() {
    let pattern = [(60i32, 'q'), (62, 'e')];
    let sequence = [(60, 'q'), (58, 'q')];
    assert!(inversion(&pattern, &sequence, &Defaults, &defaults())
        .unwrap()
        .is_empty());
}

#[test]
fn test_text_values_cannot_transpose() {
    let pattern = [String::from("do"), String::from("re")];
    let sequence = pattern.clone();
    let err = transposition(&pattern, &sequence, &Defaults, &defaults()).unwrap_err();
    assert!(matches!(err, VariationError::UnsupportedOperation { .. }));
    let err = inversion(&pattern, &sequence, &Defaults, &defaults()).unwrap_err();
    assert!(matches!(err, VariationError::UnsupportedOperation { .. }));
}

#[test]
fn test_overflowing_offsets_do_not_match() {
    let pattern = [0i8, -100];
    let sequence = [0i8, 100, 0, -100];
    let found = transposition(&pattern, &sequence, &Defaults, &defaults()).unwrap();
    assert_eq!(
        found,
        vec![
            Transposition {
                position: 1,
                offset: 100,
            },
            Transposition {
                position: 2,
                offset: 0,
            },
        ]
    );

    // 100 - (-100) does not fit in an i8
    let found = transposition(&[-100i8, 0], &[100, 0], &Defaults, &defaults()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_overflowing_axis_sums_do_not_match() {
    let found = inversion(&[0i8, 100], &[0, 100], &Defaults, &defaults()).unwrap();
    assert!(found.is_empty());
    let found = inversion(&[100i8, 100], &[100, 100], &Defaults, &defaults()).unwrap();
    assert!(found.is_empty());
}

// ============================================================================
// Local changes
// ============================================================================

#[test]
fn test_local_value_change() {
    let pattern = [1i32, 2, 3, 4];
    let sequence = [1, 2, 9, 4, 1, 2, 3, 4];
    let found = local_value_changes(&pattern, &sequence, &Defaults, &defaults()).unwrap();
    assert_eq!(
        found,
        vec![LocalChange {
            position: 0,
            diffs: vec![Diff {
                index: 2,
                expected: 3,
                found: 9
            }],
        }]
    );
}

#[test]
fn test_local_value_change_respects_max_changes() {
    let pattern = [1i32, 2, 3, 4];
    let sequence = [1, 5, 9, 4];
    assert!(local_value_changes(&pattern, &sequence, &Defaults, &defaults())
        .unwrap()
        .is_empty());
    let two = defaults().with_max_changes(2);
    let found = local_value_changes(&pattern, &sequence, &Defaults, &two).unwrap();
    assert_eq!(found[0].changed_indices(), vec![1, 2]);
}

#[test]
fn test_local_value_change_with_tolerance() {
    let pattern = [1.0f64, 2.0, 3.0];
    let sequence = [1.05, 2.0, 3.5];
    let config = defaults().with_epsilon(0.1);
    let found = local_value_changes(&pattern, &sequence, &Defaults, &config).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].changed_indices(), vec![2]);

    let capped = config.with_max_delta(0.25);
    assert!(local_value_changes(&pattern, &sequence, &Defaults, &capped)
        .unwrap()
        .is_empty());
}

#[test]
fn test_local_changes_reject_bad_config() {
    let config = defaults().with_epsilon(-0.5);
    let err = local_value_changes(&[1i32], &[2], &Defaults, &config).unwrap_err();
    assert!(err.is_invalid_input());
    let err = local_aux_changes(&[1i32], &[2], &Defaults, &config).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_local_aux_change() {
    let pattern = [(60i32, "q"), (62, "e"), (64, "e"), (65, "q")];
    let sequence = [(60, "q"), (62, "q"), (64, "e"), (65, "q")];
    let found = local_aux_changes(&pattern, &sequence, &Defaults, &defaults()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].diffs,
        vec![Diff {
            index: 1,
            expected: "e",
            found: "q"
        }]
    );
}

#[test]
fn test_local_aux_change_needs_equal_values() {
    let pattern = [(60i32, "q"), (62, "e")];
    let sequence = [(61, "q"), (62, "q")];
    assert!(local_aux_changes(&pattern, &sequence, &Defaults, &defaults())
        .unwrap()
        .is_empty());
}

#[test]
fn test_absent_vs_present_aux_is_a_mismatch() {
    let a = Scalar::text("a");
    let b = Scalar::text("b");
    let pattern = [Element::pair(1, a.clone()), Element::bare(2)];

    let gained_aux = [Element::pair(1, b.clone()), Element::pair(2, b.clone())];
    assert!(local_aux_changes(&pattern, &gained_aux, &Defaults, &defaults())
        .unwrap()
        .is_empty());

    let changed = [Element::pair(1, b.clone()), Element::bare(2)];
    let found = local_aux_changes(&pattern, &changed, &Defaults, &defaults()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].diffs[0].expected, a);
    assert_eq!(found[0].diffs[0].found, b);
}

// ============================================================================
// Fragmentation / extension
// ============================================================================

#[test]
fn test_fragmentation_with_one_deletion() {
    let found = fragmentation(&[1i32, 2, 3, 4], &[1, 2, 4, 9], &Defaults, &defaults()).unwrap();
    assert_eq!(
        found,
        vec![Fragmentation {
            position: 0,
            window_length: 3,
            deleted_indices: vec![2],
        }]
    );
}

#[test]
fn test_fragmentation_skips_exact_repetitions() {
    let found = fragmentation(&[1i32, 2, 3, 4], &[1, 2, 3, 4], &Defaults, &defaults()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_fragmentation_suppresses_overlaps() {
    let config = defaults().with_min_fragment(2);
    let found = fragmentation(&[1i32, 2, 3, 4], &[1, 2, 4, 9], &Defaults, &config).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].position, 0);
}

#[test]
fn test_fragmentation_prefers_longest_window() {
    let config = defaults().with_min_fragment(2);
    let sequence = [9, 1, 2, 4, 5, 9];
    let found = fragmentation(&[1i32, 2, 3, 4, 5], &sequence, &Defaults, &config).unwrap();
    assert_eq!(found[0].position, 1);
    assert_eq!(found[0].window_length, 4);
    assert_eq!(found[0].deleted_indices, vec![2]);
}

#[test]
fn test_fragmentation_short_sequence_is_empty() {
    let found = fragmentation(&[1i32, 2, 3, 4], &[1, 2, 4], &Defaults, &defaults()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_extension_with_one_insertion() {
    let found = extension(&[1i32, 2, 3], &[1, 9, 2, 3], &Defaults, &defaults()).unwrap();
    assert_eq!(
        found,
        vec![Extension {
            position: 0,
            window_length: 4,
            inserted_indices: vec![1],
        }]
    );
}

#[test]
fn test_extension_rejects_edge_insertions() {
    assert!(extension(&[1i32, 2, 3], &[1, 2, 3, 9], &Defaults, &defaults())
        .unwrap()
        .is_empty());
    assert!(extension(&[1i32, 2, 3], &[1, 2, 3], &Defaults, &defaults())
        .unwrap()
        .is_empty());
}

#[test]
fn test_repetition_with_trailing_repeat_is_not_an_extension() {
    let sequence = [1i32, 2, 3, 3];
    assert_eq!(repetition(&[1, 2, 3], &sequence, &Defaults).unwrap(), vec![0]);
    assert!(extension(&[1, 2, 3], &sequence, &Defaults, &defaults())
        .unwrap()
        .is_empty());
}

#[test]
fn test_extension_picks_shortest_window() {
    let found = extension(&[1i32, 2, 3], &[1, 9, 2, 3, 8, 3], &Defaults, &defaults()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].window_length, 4);
}

#[test]
fn test_extension_bounded_by_max_window() {
    let config = defaults().with_max_window(4);
    let found = extension(&[1i32, 2, 3], &[1, 9, 9, 2, 3], &Defaults, &config).unwrap();
    assert!(found.is_empty());
    let found = extension(&[1i32, 2, 3], &[1, 9, 9, 2, 3], &Defaults, &defaults()).unwrap();
    assert_eq!(found[0].inserted_indices, vec![1, 2]);
}

#[test]
fn test_single_item_pattern_never_extends() {
    let found = extension(&[1i32], &[1, 1, 1], &Defaults, &defaults()).unwrap();
    assert!(found.is_empty());
}

// ============================================================================
// Shared behavior
// ============================================================================

#[test]
fn test_empty_pattern_is_an_error_everywhere() {
    let empty: [i32; 0] = [];
    let seq = [1i32, 2, 3];
    let config = defaults();
    let errors = vec![
        repetition(&empty, &seq, &Defaults).unwrap_err(),
        transposition(&empty, &seq, &Defaults, &config).unwrap_err(),
        retrograde(&empty, &seq, &Defaults, &config).unwrap_err(),
        inversion(&empty, &seq, &Defaults, &config).unwrap_err(),
        local_aux_changes(&empty, &seq, &Defaults, &config).unwrap_err(),
        local_value_changes(&empty, &seq, &Defaults, &config).unwrap_err(),
        fragmentation(&empty, &seq, &Defaults, &config).unwrap_err(),
        extension(&empty, &seq, &Defaults, &config).unwrap_err(),
    ];
    assert!(errors.iter().all(|e| *e == VariationError::EmptyPattern));
}

#[test]
fn test_custom_extractor() {
    struct Note {
        pitch: i32,
        velocity: u8,
    }
    let note = |pitch| Note {
        pitch,
        velocity: 90,
    };
    let by_pitch = FnExtractor::value_only(|n: &Note| n.pitch);
    let pattern = [note(60), note(64)];
    let sequence = [note(65), note(69), note(10)];
    assert_eq!(sequence[2].velocity, 90);

    let found = transposition(&pattern, &sequence, &by_pitch, &defaults()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].offset, 5);
}

#[test]
fn test_detector_analyze() {
    let detector = Detector::new(Defaults);
    let report = detector
        .analyze(&[1i32, 2, 3], &[0, 1, 2, 3, 4, 2, 3, 4])
        .unwrap();
    assert_eq!(report.repetitions, vec![1]);
    assert_eq!(report.transpositions.len(), 4);
    assert!(report.total() >= 5);
}

#[test]
fn test_detector_analyze_propagates_errors() {
    let detector = Detector::new(Defaults);
    let empty: [i32; 0] = [];
    assert_eq!(
        detector.analyze(&empty, &[1]).unwrap_err(),
        VariationError::EmptyPattern
    );
}

#[test]
fn test_analyze_only_runs_selected_detectors() {
    let detector = Detector::new(Defaults);
    let labels = [Scalar::text("do"), Scalar::text("re")];
    let report = detector
        .analyze_only(&["repetition", "retrograde"], &labels, &labels)
        .unwrap();
    assert_eq!(report.repetitions, vec![0]);
    assert!(report.transpositions.is_empty());

    let err = detector
        .analyze_only(&["repetition", "canon"], &labels, &labels)
        .unwrap_err();
    assert!(err.to_string().contains("canon"));
}
