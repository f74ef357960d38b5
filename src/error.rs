use thiserror::Error;

pub type SoilResult<T> = Result<T, SoilError>;

#[derive(Error, Debug)]
pub enum SoilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("No soil layers selected")]
    EmptySelection,

    #[error("Selection error: {0}")]
    Selection(String),

    #[error(
        "Layer '{label}' has no column {column} (table has {width} columns)"
    )]
    ColumnOutOfRange {
        label: String,
        column: usize,
        width: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
