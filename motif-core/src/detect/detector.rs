use super::record::{Extension, Fragmentation, Inversion, LocalChange, Transposition};
use super::DETECTORS;
use crate::arith::Arithmetic;
use crate::config::VariationConfig;
use crate::error::{Result, VariationError};
use crate::extract::{Defaults, Extractor};
use crate::report::VariationReport;

/// An extractor and a configuration, applied to any pattern and sequence.
///
/// ```
/// use motif_core::{Defaults, Detector, VariationConfig};
///
/// let detector = Detector::new(Defaults).with_config(VariationConfig::strict());
/// let report = detector.analyze(&[60i32, 62, 64], &[62, 64, 66, 60, 62, 64]).unwrap();
/// assert_eq!(report.repetitions, vec![3]);
/// assert_eq!(report.transpositions.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Detector<E = Defaults> {
    extractor: E,
    config: VariationConfig,
}

impl<E> Detector<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            config: VariationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: VariationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &VariationConfig {
        &self.config
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn repetition<I>(&self, pattern: &[I], sequence: &[I]) -> Result<Vec<usize>>
    where
        E: Extractor<I>,
        E::Value: PartialEq,
        E::Aux: PartialEq,
    {
        super::repetition(pattern, sequence, &self.extractor)
    }

    pub fn transposition<I>(
        &self,
        pattern: &[I],
        sequence: &[I],
    ) -> Result<Vec<Transposition<E::Value>>>
    where
        E: Extractor<I>,
        E::Value: PartialEq + Arithmetic,
        E::Aux: PartialEq,
    {
        super::transposition(pattern, sequence, &self.extractor, &self.config)
    }

    pub fn retrograde<I>(&self, pattern: &[I], sequence: &[I]) -> Result<Vec<usize>>
    where
        E: Extractor<I>,
        E::Value: PartialEq,
        E::Aux: PartialEq,
    {
        super::retrograde(pattern, sequence, &self.extractor, &self.config)
    }

    pub fn inversion<I>(&self, pattern: &[I], sequence: &[I]) -> Result<Vec<Inversion<E::Value>>>
    where
        E: Extractor<I>,
        E::Value: PartialEq + Arithmetic,
        E::Aux: PartialEq,
    {
        super::inversion(pattern, sequence, &self.extractor, &self.config)
    }

    pub fn local_aux_changes<I>(
        &self,
        pattern: &[I],
        sequence: &[I],
    ) -> Result<Vec<LocalChange<E::Aux>>>
    where
        E: Extractor<I>,
        E::Value: PartialEq,
        E::Aux: PartialEq + Arithmetic + Clone,
    {
        super::local_aux_changes(pattern, sequence, &self.extractor, &self.config)
    }

    pub fn local_value_changes<I>(
        &self,
        pattern: &[I],
        sequence: &[I],
    ) -> Result<Vec<LocalChange<E::Value>>>
    where
        E: Extractor<I>,
        E::Value: PartialEq + Arithmetic + Clone,
        E::Aux: PartialEq,
    {
        super::local_value_changes(pattern, sequence, &self.extractor, &self.config)
    }

    pub fn fragmentation<I>(&self, pattern: &[I], sequence: &[I]) -> Result<Vec<Fragmentation>>
    where
        E: Extractor<I>,
        E::Value: PartialEq,
        E::Aux: PartialEq,
    {
        super::fragmentation(pattern, sequence, &self.extractor, &self.config)
    }

    pub fn extension<I>(&self, pattern: &[I], sequence: &[I]) -> Result<Vec<Extension>>
    where
        E: Extractor<I>,
        E::Value: PartialEq,
        E::Aux: PartialEq,
    {
        super::extension(pattern, sequence, &self.extractor, &self.config)
    }

    /// Run all eight detectors. The first error aborts the whole analysis.
    pub fn analyze<I>(
        &self,
        pattern: &[I],
        sequence: &[I],
    ) -> Result<VariationReport<E::Value, E::Aux>>
    where
        E: Extractor<I>,
        E::Value: PartialEq + Arithmetic + Clone,
        E::Aux: PartialEq + Arithmetic + Clone,
    {
        self.analyze_only(&DETECTORS, pattern, sequence)
    }

    /// Run the named detectors (see [`DETECTORS`]) and leave the other
    /// lists of the report empty. Unknown names are rejected up front.
    pub fn analyze_only<I>(
        &self,
        detectors: &[&str],
        pattern: &[I],
        sequence: &[I],
    ) -> Result<VariationReport<E::Value, E::Aux>>
    where
        E: Extractor<I>,
        E::Value: PartialEq + Arithmetic + Clone,
        E::Aux: PartialEq + Arithmetic + Clone,
    {
        if let Some(unknown) = detectors.iter().find(|name| !DETECTORS.contains(*name)) {
            return Err(VariationError::InvalidInput(format!(
                "unknown detector '{}'",
                unknown
            )));
        }

        let mut report = VariationReport::empty(pattern.len(), sequence.len());
        for name in detectors {
            match *name {
                "repetition" => report.repetitions = self.repetition(pattern, sequence)?,
                "transposition" => report.transpositions = self.transposition(pattern, sequence)?,
                "retrograde" => report.retrogrades = self.retrograde(pattern, sequence)?,
                "inversion" => report.inversions = self.inversion(pattern, sequence)?,
                "local_aux_changes" => {
                    report.aux_changes = self.local_aux_changes(pattern, sequence)?
                }
                "local_value_changes" => {
                    report.value_changes = self.local_value_changes(pattern, sequence)?
                }
                "fragmentation" => report.fragmentations = self.fragmentation(pattern, sequence)?,
                "extension" => report.extensions = self.extension(pattern, sequence)?,
                _ => {}
            }
        }
        Ok(report)
    }
}
