//! Near-Earth object records and threat ranking.
//!
//! Ranking follows the classic "largest of the closest" rule: keep the
//! fraction of objects with the smallest MOID, then order those by size.

use crate::orbit::{OrbitError, OrbitalElements};

/// Share of the catalog, by MOID, considered close enough to matter.
pub const DEFAULT_CLOSEST_FRACTION: f64 = 0.10;

/// Number of candidates reported by a ranking.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// A catalogued near-Earth object.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoRecord {
    pub name: String,
    /// Estimated diameter in km, when known.
    pub diameter_km: Option<f64>,
    /// Minimum orbit intersection distance with Earth in AU, when known.
    /// Display-only; never used in orbit computation.
    pub moid_au: Option<f64>,
    pub elements: OrbitalElements,
    /// Mean anomaly at epoch, degrees.
    pub mean_anomaly_deg: f64,
    /// Epoch as a Julian date.
    pub epoch_jd: f64,
}

impl NeoRecord {
    /// Whether the record has both a MOID and a diameter.
    pub fn is_complete(&self) -> bool {
        self.moid_au.is_some_and(f64::is_finite) && self.diameter_km.is_some_and(f64::is_finite)
    }
}

/// Pick the largest objects among the closest `closest_fraction` of the catalog.
///
/// Records missing a MOID or a diameter are ignored. The close set holds
/// `floor(n * closest_fraction)` records, so small catalogs can rank nothing.
pub fn rank_threats(records: &[NeoRecord], closest_fraction: f64, limit: usize) -> Vec<NeoRecord> {
    let mut complete: Vec<&NeoRecord> = records.iter().filter(|r| r.is_complete()).collect();

    complete.sort_by(|a, b| {
        a.moid_au
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.moid_au.unwrap_or(f64::INFINITY))
    });

    let fraction = closest_fraction.clamp(0.0, 1.0);
    let cutoff = (complete.len() as f64 * fraction).floor() as usize;
    complete.truncate(cutoff);

    complete.sort_by(|a, b| {
        b.diameter_km
            .unwrap_or(0.0)
            .total_cmp(&a.diameter_km.unwrap_or(0.0))
    });

    complete.into_iter().take(limit).cloned().collect()
}

/// Comet 109P/Swift-Tuttle, the largest known object with a small MOID.
pub fn swift_tuttle() -> Result<NeoRecord, OrbitError> {
    Ok(NeoRecord {
        name: "109P/Swift-Tuttle".to_string(),
        diameter_km: Some(26.0),
        moid_au: Some(0.000892),
        elements: OrbitalElements::new(26.09, 0.9632, 113.45, 139.38, 152.98)?,
        mean_anomaly_deg: 7.63,
        epoch_jd: 2_450_000.5,
    })
}

/// Moderate-eccentricity target used by the default scenario.
pub fn training_target() -> Result<NeoRecord, OrbitError> {
    Ok(NeoRecord {
        name: "Training target".to_string(),
        diameter_km: Some(1.2),
        moid_au: Some(0.03),
        elements: OrbitalElements::new(2.543, 0.6247, 0.45, 125.37, 277.86)?,
        mean_anomaly_deg: 0.0,
        epoch_jd: 2_451_545.0,
    })
}

/// Built-in targets, default first.
pub fn presets() -> Result<Vec<NeoRecord>, OrbitError> {
    Ok(vec![training_target()?, swift_tuttle()?])
}
