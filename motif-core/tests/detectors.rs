use motif_core::value::ratio;
use motif_core::*;

fn notes(literals: &[(&str, &str)]) -> Vec<Element> {
    literals
        .iter()
        .map(|(v, a)| Element::Pair(v.parse().unwrap(), a.parse().unwrap()))
        .collect()
}

#[test]
fn test_melody_transposed_up_a_whole_step() {
    let pattern = notes(&[("60", "1"), ("62", "1/2"), ("64", "1/2")]);
    let sequence = notes(&[("62", "1"), ("64", "1/2"), ("66", "1/2")]);
    let found = transposition(&pattern, &sequence, &Defaults, &VariationConfig::default()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].position, 0);
    assert_eq!(found[0].offset, Scalar::Int(2));
}

#[test]
fn test_rhythm_change_is_a_local_aux_change() {
    let pattern = notes(&[("60", "1"), ("62", "1/2"), ("64", "1/2"), ("65", "1")]);
    let sequence = notes(&[
        ("55", "1"),
        ("60", "1"),
        ("62", "1/2"),
        ("64", "1"),
        ("65", "1"),
    ]);
    let config = VariationConfig::default();
    let found = local_aux_changes(&pattern, &sequence, &Defaults, &config).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].position, 1);
    assert_eq!(found[0].diffs[0].index, 2);
    assert_eq!(found[0].diffs[0].expected, Scalar::Ratio(ratio(1, 2)));
    assert_eq!(found[0].diffs[0].found, Scalar::Int(1));
}

#[test]
fn test_durations_within_tolerance_are_not_changes() {
    let pattern = notes(&[("60", "0.5"), ("62", "0.5")]);
    let sequence = notes(&[("60", "0.52"), ("62", "0.25")]);
    let config = VariationConfig::default().with_epsilon(0.05);
    let found = local_aux_changes(&pattern, &sequence, &Defaults, &config).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].changed_indices(), vec![1]);
}

#[test]
fn test_labels_work_without_arithmetic() {
    let pattern: Vec<Scalar> = ["do", "re", "mi"].iter().map(|s| s.parse().unwrap()).collect();
    let sequence: Vec<Scalar> = ["la", "do", "re", "mi", "mi", "re", "do"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let config = VariationConfig::default();
    assert_eq!(repetition(&pattern, &sequence, &Defaults).unwrap(), vec![1]);
    assert_eq!(retrograde(&pattern, &sequence, &Defaults, &config).unwrap(), vec![4]);
    let changed = local_value_changes(&pattern, &sequence, &Defaults, &config).unwrap();
    assert!(changed.iter().all(|c| c.diffs.len() == 1));
}

#[test]
fn test_labels_fail_on_arithmetic() {
    let pattern = vec![Scalar::text("do"), Scalar::text("re")];
    let config = VariationConfig::default();
    let err = transposition(&pattern, &pattern, &Defaults, &config).unwrap_err();
    assert!(matches!(err, VariationError::UnsupportedOperation { .. }));
    assert!(err.to_string().contains("do"));

    let config = VariationConfig::default().with_epsilon(0.5);
    let sequence = vec![Scalar::text("do"), Scalar::text("mi")];
    let err = local_value_changes(&pattern, &sequence, &Defaults, &config).unwrap_err();
    assert!(matches!(err, VariationError::UnsupportedOperation { .. }));
}

#[test]
fn test_short_sequence_is_not_an_error() {
    let report = Detector::new(Defaults)
        .analyze(&[1i64, 2, 3], &[1, 2])
        .unwrap();
    assert!(report.is_empty());
}

#[derive(Debug, Clone)]
struct Event {
    pitch: i64,
    channel: u8,
}

#[test]
fn test_struct_items_through_closures() {
    let extractor = FnExtractor::new(
        |e: &Event| e.pitch,
        |e: &Event| Aux::Present(i64::from(e.channel)),
    );
    let ev = |pitch, channel| Event { pitch, channel };
    let pattern = vec![ev(60, 1), ev(64, 1), ev(67, 1)];
    let sequence = vec![ev(72, 1), ev(68, 1), ev(65, 1), ev(60, 1), ev(64, 2), ev(67, 1)];

    let detector = Detector::new(extractor);
    let inversions = detector.inversion(&pattern, &sequence).unwrap();
    assert_eq!(inversions.len(), 1);
    assert_eq!(inversions[0].position, 0);
    assert_eq!(inversions[0].axis.to_f64(), Some(66.0));

    let channel_moves = detector.local_aux_changes(&pattern, &sequence).unwrap();
    assert_eq!(channel_moves.len(), 1);
    assert_eq!(channel_moves[0].position, 3);
    assert_eq!(channel_moves[0].diffs[0].found, 2);
}

#[test]
fn test_report_renders_every_detector() {
    // Every note on channel 0
    let on_channel =
        |values: &[i32]| -> Vec<(i32, i32)> { values.iter().map(|&v| (v, 0)).collect() };
    let report = Detector::new(Defaults)
        .analyze(&on_channel(&[1, 2, 3]), &on_channel(&[0, 1, 2, 3, 4, 2, 3, 4]))
        .unwrap();
    let text = report.to_string();
    let names = [
        "repetition",
        "transposition",
        "retrograde",
        "inversion",
        "fragmentation",
        "extension",
    ];
    for name in names {
        assert!(text.contains(name), "missing {} in {}", name, text);
    }
}

#[test]
fn test_invalid_config_surfaces_from_analyze() {
    let config = VariationConfig::default().with_epsilon(f64::NAN);
    let detector = Detector::new(Defaults).with_config(config);
    let err = detector.analyze(&[1i32], &[1]).unwrap_err();
    assert!(err.is_invalid_input());
}
