//! Soilgen - Soil Model generator for geotechnical spreadsheets
//!
//! Reads a soil-property workbook and writes the material definitions
//! expected by the modelling application:
//!
//! - a Soil Model script with one Mohr-Coulomb material per soil layer,
//!   plus optional interface (`_int`), 3E and 5E variants
//! - an optional `.sba` wall-data file built from columns AS:AY
//!
//! # Example
//!
//! ```no_run
//! use soilgen::core::{GenerationRequest, Selection, SoilModelGenerator};
//! use soilgen::excel::WorkbookLoader;
//! use soilgen::types::{ConfidenceLevel, VariantFlags};
//!
//! let table = WorkbookLoader::new("soils.xlsx").load()?;
//! let request = GenerationRequest {
//!     selection: Selection::all(&table),
//!     confidence: ConfidenceLevel::P095,
//!     variants: VariantFlags::new(true, false, false),
//!     wall: true,
//! };
//!
//! let output = SoilModelGenerator::seeded(42).generate(&table, &request)?;
//! println!("{}", output.soil_model);
//! # Ok::<(), soilgen::error::SoilError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{SoilError, SoilResult};
pub use types::{CellValue, ConfidenceLevel, Row, SoilTable, VariantFlags};
