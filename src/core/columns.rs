//! Positional column map of the soil-property workbook.
//!
//! The workbook has no stable header names, so every parameter is read by
//! its 0-based column position (A = 0).

use crate::types::ConfidenceLevel;
use std::ops::RangeInclusive;

/// Layer label (column A)
pub const LABEL: usize = 0;

/// Friction angle φ at confidence 0.85 (F)
pub const PHI_P085: usize = 5;
/// Cohesion c at confidence 0.85 (G)
pub const COHESION_P085: usize = 6;
/// Friction angle φ at confidence 0.95 (I)
pub const PHI_P095: usize = 8;
/// Cohesion c at confidence 0.95 (J)
pub const COHESION_P095: usize = 9;

/// Reference modulus E (K)
pub const E_REF: usize = 10;
/// Poisson's ratio ν (M)
pub const POISSON: usize = 12;
/// Saturated unit weight γ_sat (N)
pub const GAMMA_SAT: usize = 13;
/// Unsaturated unit weight at confidence 0.85 (Q)
pub const GAMMA_UNSAT_P085: usize = 16;
/// Unsaturated unit weight at confidence 0.95 (S)
pub const GAMMA_UNSAT_P095: usize = 18;
/// Initial void ratio (V)
pub const E_INIT: usize = 21;

/// Modulus for the 5E variant (AD)
pub const E_REF_5E: usize = 29;
/// Modulus for the 3E variant (AE)
pub const E_REF_3E: usize = 30;
/// Friction angle for the interface variant (AF)
pub const PHI_INTERFACE: usize = 31;

/// Wall data window, AS:AY
pub const WALL_DATA: RangeInclusive<usize> = 44..=50;

/// Source columns that depend on the confidence level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthColumns {
    pub phi: usize,
    pub cohesion: usize,
    pub gamma_unsat: usize,
}

impl StrengthColumns {
    pub fn for_level(level: ConfidenceLevel) -> Self {
        match level {
            ConfidenceLevel::P085 => Self {
                phi: PHI_P085,
                cohesion: COHESION_P085,
                gamma_unsat: GAMMA_UNSAT_P085,
            },
            ConfidenceLevel::P095 => Self {
                phi: PHI_P095,
                cohesion: COHESION_P095,
                gamma_unsat: GAMMA_UNSAT_P095,
            },
        }
    }
}

/// Wall-data columns that exist in a table of the given width
pub fn wall_window(width: usize) -> Vec<usize> {
    WALL_DATA.filter(|col| *col < width).collect()
}
