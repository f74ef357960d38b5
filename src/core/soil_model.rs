//! Soil Model material script emitter
//!
//! Each selected layer produces a Mohr-Coulomb base material `MC_<label>` and,
//! depending on the variant flags, `MC_<label>_int`, `MC_<label>_3E` and
//! `MC_<label>_5E`. Every block is ten lines:
//!
//! ```text
//! _soilmat "SoilModel" 2
//! set SoilMat_1.Identification "MC_1"
//! _set MC_1.Colour 8421504
//! _set MC_1.gammaUnsat 18.5
//! _set MC_1.gammaSat 19.2
//! _set MC_1.ERef 12000.0
//! _set MC_1.nu 0.3
//! _set MC_1.cRef 5.0
//! _set MC_1.phi 28.4
//! _set MC_1.eInit 0.65
//! ```

use crate::core::columns::{self, StrengthColumns};
use crate::core::normalizer::{normalize, Normalized};
use crate::core::palette::ColorPalette;
use crate::error::{SoilError, SoilResult};
use crate::types::{ConfidenceLevel, Row, VariantFlags};
use std::fmt;

/// First line of every material block
pub const SOILMAT_HEADER: &str = "_soilmat \"SoilModel\" 2";

/// Lines per material block
pub const BLOCK_LINES: usize = 10;

/// Interface materials always get a reference cohesion of 1
const INTERFACE_COHESION: &str = "1";
/// Poisson's ratio written for the 3E and 5E materials
const STIFF_POISSON: &str = "0.2";

/// Material kinds derived from one soil layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialVariant {
    Base,
    Interface,
    ThreeE,
    FiveE,
}

impl MaterialVariant {
    /// Optional variants, in emission order
    pub const OPTIONAL: [MaterialVariant; 3] = [
        MaterialVariant::Interface,
        MaterialVariant::ThreeE,
        MaterialVariant::FiveE,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            MaterialVariant::Base => "",
            MaterialVariant::Interface => "_int",
            MaterialVariant::ThreeE => "_3E",
            MaterialVariant::FiveE => "_5E",
        }
    }

    /// Material identification, e.g. `MC_2a_3E`
    pub fn identifier(&self, label: &str) -> String {
        format!("MC_{}{}", label, self.suffix())
    }

    fn is_enabled(&self, flags: &VariantFlags) -> bool {
        match self {
            MaterialVariant::Base => true,
            MaterialVariant::Interface => flags.interface,
            MaterialVariant::ThreeE => flags.three_e,
            MaterialVariant::FiveE => flags.five_e,
        }
    }
}

/// Parameter value: either read from the sheet or a fixed literal
#[derive(Debug, Clone, PartialEq)]
enum Param {
    Cell(Normalized),
    Literal(&'static str),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Cell(value) => value.fmt(f),
            Param::Literal(text) => f.write_str(text),
        }
    }
}

/// One material definition, built and written in a single pass
#[derive(Debug, Clone, PartialEq)]
struct MaterialBlock {
    id: String,
    colour: u32,
    gamma_unsat: Param,
    gamma_sat: Param,
    e_ref: Param,
    nu: Param,
    c_ref: Param,
    phi: Param,
    e_init: Param,
}

impl MaterialBlock {
    fn build(
        row: &Row,
        label: &str,
        variant: MaterialVariant,
        colour: u32,
        cols: StrengthColumns,
    ) -> SoilResult<Self> {
        let cell = |column: usize| read_cell(row, label, column).map(Param::Cell);

        let (e_ref, nu, c_ref, phi) = match variant {
            MaterialVariant::Base => (
                cell(columns::E_REF)?,
                cell(columns::POISSON)?,
                cell(cols.cohesion)?,
                cell(cols.phi)?,
            ),
            MaterialVariant::Interface => (
                cell(columns::E_REF)?,
                cell(columns::POISSON)?,
                Param::Literal(INTERFACE_COHESION),
                cell(columns::PHI_INTERFACE)?,
            ),
            MaterialVariant::ThreeE => (
                cell(columns::E_REF_3E)?,
                Param::Literal(STIFF_POISSON),
                cell(cols.cohesion)?,
                cell(cols.phi)?,
            ),
            MaterialVariant::FiveE => (
                cell(columns::E_REF_5E)?,
                Param::Literal(STIFF_POISSON),
                cell(cols.cohesion)?,
                cell(cols.phi)?,
            ),
        };

        Ok(Self {
            id: variant.identifier(label),
            colour,
            gamma_unsat: cell(cols.gamma_unsat)?,
            gamma_sat: cell(columns::GAMMA_SAT)?,
            e_ref,
            nu,
            c_ref,
            phi,
            e_init: cell(columns::E_INIT)?,
        })
    }

    fn write_lines(&self, out: &mut Vec<String>) {
        let id = &self.id;
        out.push(SOILMAT_HEADER.to_string());
        out.push(format!("set SoilMat_1.Identification \"{}\"", id));
        out.push(format!("_set {}.Colour {}", id, self.colour));
        out.push(format!("_set {}.gammaUnsat {}", id, self.gamma_unsat));
        out.push(format!("_set {}.gammaSat {}", id, self.gamma_sat));
        out.push(format!("_set {}.ERef {}", id, self.e_ref));
        out.push(format!("_set {}.nu {}", id, self.nu));
        out.push(format!("_set {}.cRef {}", id, self.c_ref));
        out.push(format!("_set {}.phi {}", id, self.phi));
        out.push(format!("_set {}.eInit {}", id, self.e_init));
    }
}

fn read_cell(row: &Row, label: &str, column: usize) -> SoilResult<Normalized> {
    row.cell(column)
        .map(normalize)
        .ok_or_else(|| SoilError::ColumnOutOfRange {
            label: label.to_string(),
            column,
            width: row.cells.len(),
        })
}

/// Material block lines for one layer.
///
/// The base block takes palette entry 0; each enabled variant takes the next
/// entry. A variant is skipped once the palette is used up.
pub fn emit_row(
    row: &Row,
    palette: &ColorPalette,
    level: ConfidenceLevel,
    flags: &VariantFlags,
) -> SoilResult<Vec<String>> {
    let label = row.label();
    let cols = StrengthColumns::for_level(level);
    let mut lines = Vec::with_capacity(BLOCK_LINES * palette.len());
    let mut cursor = 0;

    let variants = std::iter::once(MaterialVariant::Base).chain(MaterialVariant::OPTIONAL);
    for variant in variants.filter(|v| v.is_enabled(flags)) {
        let Some(colour) = palette.get(cursor) else {
            continue;
        };
        MaterialBlock::build(row, &label, variant, colour, cols)?.write_lines(&mut lines);
        cursor += 1;
    }

    Ok(lines)
}

/// Whole Soil Model script for the selected rows, one palette per row
pub fn render_soil_model(
    rows: &[&Row],
    palettes: &[ColorPalette],
    level: ConfidenceLevel,
    flags: &VariantFlags,
) -> SoilResult<String> {
    let mut lines = Vec::new();
    for (row, palette) in rows.iter().zip(palettes) {
        lines.extend(emit_row(row, palette, level, flags)?);
    }
    Ok(lines.join("\n"))
}
