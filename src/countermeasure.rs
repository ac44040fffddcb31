//! Deflection countermeasures and their suitability for a given threat.
//!
//! The assessment is a coarse rule of thumb keyed on object size:
//! - Nuclear standoff: vaporises surface material, works at any size
//! - Kinetic impact: momentum transfer, useless against extinction-class bodies
//! - Gravity tractor: needs decades of lead time, never a safe bet

/// Available deflection strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Countermeasure {
    /// Standoff nuclear detonation.
    NuclearStandoff,
    /// High-speed kinetic impactor (DART-style).
    KineticImpact,
    /// Slow gravitational towing by a hovering spacecraft.
    GravityTractor,
}

impl Countermeasure {
    pub const ALL: [Countermeasure; 3] = [
        Countermeasure::NuclearStandoff,
        Countermeasure::KineticImpact,
        Countermeasure::GravityTractor,
    ];

    /// Get a human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Countermeasure::NuclearStandoff => "Nuclear standoff: megatons to vaporize the surface",
            Countermeasure::KineticImpact => "Kinetic impact: high-speed collision",
            Countermeasure::GravityTractor => "Gravity tractor: slow gravitational towing",
        }
    }
}

/// Size class of a threatening object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThreatClass {
    /// Under 1 km: regional damage.
    Local,
    /// 1 to 10 km: continental damage.
    Regional,
    /// Over 10 km: extinction-level.
    Extinction,
}

impl ThreatClass {
    pub fn from_diameter_km(diameter_km: f64) -> Self {
        if diameter_km > 10.0 {
            ThreatClass::Extinction
        } else if diameter_km >= 1.0 {
            ThreatClass::Regional
        } else {
            ThreatClass::Local
        }
    }
}

/// How suitable a countermeasure is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Approved,
    HighRisk,
    CriticalFailure,
}

/// Outcome of [`assess`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assessment {
    pub countermeasure: Countermeasure,
    pub class: ThreatClass,
    pub verdict: Verdict,
    pub rationale: &'static str,
}

/// Judge `countermeasure` against an object of `diameter_km`.
pub fn assess(countermeasure: Countermeasure, diameter_km: f64) -> Assessment {
    let class = ThreatClass::from_diameter_km(diameter_km);

    let (verdict, rationale) = match (countermeasure, class) {
        (Countermeasure::NuclearStandoff, ThreatClass::Extinction) => (
            Verdict::Approved,
            "Only a standoff detonation can move an extinction-class object",
        ),
        (Countermeasure::NuclearStandoff, _) => (
            Verdict::Approved,
            "Standoff detonation delivers ample impulse",
        ),
        (Countermeasure::KineticImpact, ThreatClass::Extinction) => (
            Verdict::CriticalFailure,
            "Impactor momentum is negligible against this mass",
        ),
        (Countermeasure::KineticImpact, ThreatClass::Regional) => (
            Verdict::HighRisk,
            "Several impactors and years of lead time required",
        ),
        (Countermeasure::KineticImpact, ThreatClass::Local) => (
            Verdict::Approved,
            "Single impactor sufficient with modest lead time",
        ),
        (Countermeasure::GravityTractor, _) => (
            Verdict::HighRisk,
            "Too slow without decades of warning",
        ),
    };

    Assessment {
        countermeasure,
        class,
        verdict,
        rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_classes() {
        assert_eq!(ThreatClass::from_diameter_km(0.3), ThreatClass::Local);
        assert_eq!(ThreatClass::from_diameter_km(1.0), ThreatClass::Regional);
        assert_eq!(ThreatClass::from_diameter_km(10.0), ThreatClass::Regional);
        assert_eq!(ThreatClass::from_diameter_km(26.0), ThreatClass::Extinction);
    }

    #[test]
    fn test_extinction_class_verdicts() {
        // 26 km comet
        assert_eq!(assess(Countermeasure::NuclearStandoff, 26.0).verdict, Verdict::Approved);
        assert_eq!(assess(Countermeasure::KineticImpact, 26.0).verdict, Verdict::CriticalFailure);
        assert_eq!(assess(Countermeasure::GravityTractor, 26.0).verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_small_object_kinetic_approved() {
        let assessment = assess(Countermeasure::KineticImpact, 0.16);
        assert_eq!(assessment.class, ThreatClass::Local);
        assert_eq!(assessment.verdict, Verdict::Approved);
    }

    #[test]
    fn test_every_countermeasure_has_description() {
        for countermeasure in Countermeasure::ALL {
            assert!(!countermeasure.description().is_empty());
        }
    }
}
