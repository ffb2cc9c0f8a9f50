use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use gigapan_core::spec::PanSpec;
use tracing::debug;

use crate::dialog;

/// Number of positional values that describe a job.
pub const VALUE_COUNT: usize = 11;

pub const USAGE: &str = "\
To enter command line arguments and skip the dialog:

  gigapan generate <focal length> <sensor width> <sensor height> \\
      <start yaw> <start pitch> <how right> <how left> <how up> \\
      <how down> <horizontal overlap> <vertical overlap>

There should be 11 values in total.";

/// Where a job description comes from: eleven positional values, a TOML
/// file, or (with neither) an interactive dialog.
#[derive(Args)]
pub struct SpecArgs {
    /// Focal length, sensor width, sensor height, start yaw, start pitch,
    /// how right, how left, how up, how down, horizontal overlap, vertical
    /// overlap
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Widen the yaw step per row to correct for foreshortening
    #[arg(long)]
    pub optimize: bool,

    /// Job description file (TOML)
    #[arg(long, conflicts_with = "values")]
    pub config: Option<PathBuf>,
}

impl SpecArgs {
    /// Build and validate the job.
    pub fn resolve(&self) -> Result<PanSpec> {
        let mut spec = if let Some(ref path) = self.config {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            debug!(path = %path.display(), "Loaded job description");
            toml::from_str::<PanSpec>(&contents).context("Invalid job description")?
        } else {
            match self.values.len() {
                0 => dialog::prompt_spec(self.optimize)?,
                VALUE_COUNT => spec_from_values(&self.values, self.optimize)?,
                n => {
                    eprintln!("{USAGE}");
                    bail!("Expected either no values or {VALUE_COUNT}, got {n}");
                }
            }
        };
        spec.optimize |= self.optimize;

        spec.validate()?;
        Ok(spec)
    }
}

fn spec_from_values(values: &[f64], optimize: bool) -> Result<PanSpec> {
    let values: &[f64; VALUE_COUNT] = values
        .try_into()
        .with_context(|| format!("Expected {VALUE_COUNT} values"))?;
    Ok(PanSpec::from_values(values, optimize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[f64]) -> SpecArgs {
        SpecArgs {
            values: values.to_vec(),
            optimize: false,
            config: None,
        }
    }

    #[test]
    fn test_eleven_values_resolve() {
        let spec = args(&[
            50.0, 36.0, 24.0, 0.0, 0.0, 30.0, -30.0, 20.0, -20.0, 0.0, 0.0,
        ])
        .resolve()
        .unwrap();
        assert_eq!(spec.left_limit, -30.0);
        assert!(!spec.optimize);
    }

    #[test]
    fn test_wrong_value_count_fails() {
        assert!(args(&[50.0, 36.0, 24.0]).resolve().is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let result = args(&[
            0.0, 36.0, 24.0, 0.0, 0.0, 30.0, -30.0, 20.0, -20.0, 0.0, 0.0,
        ])
        .resolve();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_and_optimize_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.toml");
        std::fs::write(&path, toml::to_string_pretty(&PanSpec::default()).unwrap()).unwrap();

        let spec = SpecArgs {
            values: Vec::new(),
            optimize: true,
            config: Some(path),
        }
        .resolve()
        .unwrap();
        assert!(spec.optimize);
        assert_eq!(spec.focal_length, PanSpec::default().focal_length);
    }
}
