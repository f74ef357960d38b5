use crate::core::{GenerationOutput, WallData};
use crate::error::SoilResult;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the Soil Model script
pub const SOIL_MODEL_FILE: &str = "soil_model_output.txt";
/// File name of the wall data
pub const WALL_DATA_FILE: &str = "wall_data.sba";

/// Paths written for one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub soil_model: PathBuf,
    pub wall_data: Option<PathBuf>,
}

/// Write the generated files into `dir`, creating it if needed
pub fn write_outputs(dir: &Path, output: &GenerationOutput) -> SoilResult<WrittenFiles> {
    fs::create_dir_all(dir)?;

    let soil_model = dir.join(SOIL_MODEL_FILE);
    fs::write(&soil_model, &output.soil_model)?;

    let wall_data = match &output.wall_data {
        WallData::Ready(text) => {
            let path = dir.join(WALL_DATA_FILE);
            fs::write(&path, text)?;
            Some(path)
        }
        WallData::NotRequested | WallData::Unavailable => None,
    };

    Ok(WrittenFiles {
        soil_model,
        wall_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn output(wall_data: WallData) -> GenerationOutput {
        GenerationOutput {
            soil_model: "_soilmat \"SoilModel\" 2".to_string(),
            wall_data,
            layers: 1,
        }
    }

    #[test]
    fn test_write_soil_model_only() {
        let temp_dir = TempDir::new().unwrap();
        let written = write_outputs(temp_dir.path(), &output(WallData::Unavailable)).unwrap();
        assert_eq!(written.soil_model, temp_dir.path().join(SOIL_MODEL_FILE));
        assert!(written.wall_data.is_none());
        assert!(!temp_dir.path().join(WALL_DATA_FILE).exists());
        assert_eq!(
            fs::read_to_string(&written.soil_model).unwrap(),
            "_soilmat \"SoilModel\" 2"
        );
    }

    #[test]
    fn test_write_wall_data_into_new_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("out");
        let written = write_outputs(&dir, &output(WallData::Ready("1\n2.5".to_string()))).unwrap();
        let wall = written.wall_data.unwrap();
        assert_eq!(fs::read_to_string(wall).unwrap(), "1\n2.5");
    }
}
