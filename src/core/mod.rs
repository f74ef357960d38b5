//! Soil Model generation: row selection, colours, normalization and emitters

pub mod columns;
pub mod generator;
pub mod normalizer;
pub mod palette;
pub mod selector;
pub mod soil_model;
pub mod wall_data;

pub use generator::{GenerationOutput, GenerationRequest, SoilModelGenerator, WallData};
pub use normalizer::{normalize, Normalized};
pub use palette::ColorPalette;
pub use selector::Selection;
