//! The end-to-end generation pipeline.

use rand::Rng;
use tracing::info;

use crate::models::{DatasetParams, GeneratedDataset};

use super::anomalies::inject_anomalies;
use super::registrations::generate_registrations;
use super::work_patterns::generate_patterns;

/// Runs one full generation call: patterns, registrations, anomalies.
///
/// The computation is a pure batch: given the same parameters (including the
/// `existing_patterns` cache) and the same seeded generator, the output is
/// identical. Pattern assignment runs to completion before registration
/// synthesis starts, which the weekend-quota algorithm requires. The caller's
/// parameter set is read-only; the returned `patterns` list is the merged
/// per-employee view including reused cache entries.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use timesynth::generation::generate_dataset;
/// use timesynth::models::DatasetParams;
///
/// let params = DatasetParams::sample(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// );
/// let dataset = generate_dataset(&params, &mut StdRng::seed_from_u64(42));
/// assert_eq!(dataset.patterns.len(), params.num_employees);
/// ```
pub fn generate_dataset(params: &DatasetParams, rng: &mut impl Rng) -> GeneratedDataset {
    let patterns = generate_patterns(params, rng);
    let registrations = generate_registrations(params, &patterns, rng);
    let registrations = inject_anomalies(registrations, &patterns, &params.anomaly_config, rng);

    info!(
        employees = patterns.len(),
        registrations = registrations.len(),
        anomalies = registrations.iter().filter(|r| r.is_anomalous()).count(),
        "generated dataset"
    );
    GeneratedDataset {
        registrations,
        patterns,
    }
}
