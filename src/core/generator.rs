//! One generation request from selection to output text

use crate::core::palette::ColorPalette;
use crate::core::selector::{select_rows, Selection};
use crate::core::soil_model::render_soil_model;
use crate::core::wall_data::render_wall_data;
use crate::error::SoilResult;
use crate::types::{ConfidenceLevel, SoilTable, VariantFlags};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Everything that determines the output, apart from the colours
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub selection: Selection,
    pub confidence: ConfidenceLevel,
    pub variants: VariantFlags,
    /// Also produce the `.sba` wall-data file
    pub wall: bool,
}

/// Outcome of the wall-data part of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallData {
    NotRequested,
    /// Requested, but the table has none of the AS:AY columns
    Unavailable,
    Ready(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub soil_model: String,
    pub wall_data: WallData,
    /// Number of layers processed
    pub layers: usize,
}

/// Runs generation requests with an owned random source for the colours
pub struct SoilModelGenerator<R: Rng> {
    rng: R,
}

impl SoilModelGenerator<StdRng> {
    /// Reproducible colours
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> SoilModelGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate the Soil Model script and, if requested, the wall data.
    ///
    /// Fails without output on an empty or out-of-range selection, or when
    /// a selected row is too narrow for the requested materials.
    pub fn generate(
        &mut self,
        table: &SoilTable,
        request: &GenerationRequest,
    ) -> SoilResult<GenerationOutput> {
        let rows = select_rows(table, &request.selection)?;
        info!(
            layers = rows.len(),
            confidence = %request.confidence,
            interface = request.variants.interface,
            three_e = request.variants.three_e,
            five_e = request.variants.five_e,
            wall = request.wall,
            "generating soil model"
        );

        // One base colour per row, drawn in row order
        let palette_len = request.variants.palette_len();
        let palettes: Vec<ColorPalette> = rows
            .iter()
            .map(|row| {
                let palette = ColorPalette::generate(&mut self.rng, palette_len);
                debug!(layer = %row.label(), colours = ?palette.as_slice(), "palette");
                palette
            })
            .collect();

        let soil_model =
            render_soil_model(&rows, &palettes, request.confidence, &request.variants)?;

        let wall_data = if !request.wall {
            WallData::NotRequested
        } else {
            match render_wall_data(&rows, table.width) {
                Some(text) => WallData::Ready(text),
                None => {
                    warn!(width = table.width, "wall data columns AS:AY not found");
                    WallData::Unavailable
                }
            }
        };

        Ok(GenerationOutput {
            soil_model,
            wall_data,
            layers: rows.len(),
        })
    }
}
