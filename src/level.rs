//! Discrete fill-level classification.
//!
//! Maps a validated distance (sensor → bin contents) onto one of five
//! mutually exclusive tiers. A shorter distance means a fuller bin. Pure
//! and stateless: the tier is recomputed from scratch every cycle.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Fill-level tier of the bin, derived from distance thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillLevel {
    Empty,
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl FillLevel {
    /// Classify a validated distance (cm) into a tier.
    ///
    /// Thresholds are evaluated in fixed priority order with strict `>`
    /// comparisons, so a reading exactly on a boundary falls into the
    /// lower-fullness bracket (e.g. 40.0 cm → `Quarter`, not `Empty`).
    pub fn classify(distance_cm: f32) -> Self {
        if distance_cm > 40.0 {
            Self::Empty
        } else if distance_cm > 30.0 {
            Self::Quarter
        } else if distance_cm > 20.0 {
            Self::Half
        } else if distance_cm > 10.0 {
            Self::ThreeQuarter
        } else {
            Self::Full
        }
    }

    /// Fullness as a percentage, for log output.
    pub const fn percent(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Quarter => 25,
            Self::Half => 50,
            Self::ThreeQuarter => 75,
            Self::Full => 100,
        }
    }

    /// Indicator line index in tier order (empty → full).
    pub const fn line_index(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Quarter => 1,
            Self::Half => 2,
            Self::ThreeQuarter => 3,
            Self::Full => 4,
        }
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Full => write!(f, "full"),
            other => write!(f, "{}% full", other.percent()),
        }
    }
}
