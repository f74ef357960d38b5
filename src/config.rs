//! Generation request files
//!
//! A request can be kept next to the workbook as YAML and reused:
//!
//! ```yaml
//! sheet: Soils
//! confidence: 0.95
//! interface: true
//! three_e: false
//! five_e: true
//! wall: true
//! rows: [0, 2]
//! layers: ["ИГЭ-1"]
//! seed: 42
//! ```
//!
//! Command-line flags override values from the file.

use crate::core::{GenerationRequest, Selection};
use crate::error::{SoilError, SoilResult};
use crate::types::{ConfidenceLevel, SoilTable, VariantFlags};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Request settings; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
    pub sheet: Option<String>,
    #[serde(default, deserialize_with = "selector")]
    pub confidence: Option<String>,
    #[serde(default)]
    pub interface: bool,
    #[serde(default)]
    pub three_e: bool,
    #[serde(default)]
    pub five_e: bool,
    #[serde(default)]
    pub wall: bool,
    #[serde(default)]
    pub rows: Vec<usize>,
    #[serde(default)]
    pub layers: Vec<String>,
    #[serde(default)]
    pub all: bool,
    pub seed: Option<u64>,
}

/// `confidence: 0.85` and `confidence: "0.85"` both work
fn selector<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Selector {
        Text(String),
        Number(f64),
    }

    Ok(Option::<Selector>::deserialize(deserializer)?.map(|s| match s {
        Selector::Text(text) => text,
        Selector::Number(n) => n.to_string(),
    }))
}

impl RequestConfig {
    /// Read a YAML request file
    pub fn load(path: &Path) -> SoilResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> SoilResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay command-line values. Flags can only switch options on; a
    /// command-line selection replaces the file's selection.
    pub fn merge(mut self, overrides: RequestConfig) -> Self {
        if overrides.sheet.is_some() {
            self.sheet = overrides.sheet;
        }
        if overrides.confidence.is_some() {
            self.confidence = overrides.confidence;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.interface |= overrides.interface;
        self.three_e |= overrides.three_e;
        self.five_e |= overrides.five_e;
        self.wall |= overrides.wall;
        if !overrides.rows.is_empty() || !overrides.layers.is_empty() || overrides.all {
            self.rows = overrides.rows;
            self.layers = overrides.layers;
            self.all = overrides.all;
        }
        self
    }

    /// Resolve against a loaded table
    pub fn to_request(&self, table: &SoilTable) -> SoilResult<GenerationRequest> {
        let selection = if self.all {
            Selection::all(table)
        } else {
            let mut selection = Selection::new(self.rows.iter().copied());
            if !self.layers.is_empty() {
                selection = selection.merge(Selection::by_labels(table, &self.layers)?);
            }
            selection
        };

        let confidence = match self.confidence.as_deref() {
            None => ConfidenceLevel::default(),
            Some(selector) => {
                if selector.trim().is_empty() {
                    return Err(SoilError::Config(
                        "Confidence level must not be empty".to_string(),
                    ));
                }
                ConfidenceLevel::from_selector(selector)
            }
        };

        Ok(GenerationRequest {
            selection,
            confidence,
            variants: VariantFlags::new(self.interface, self.three_e, self.five_e),
            wall: self.wall,
        })
    }
}
