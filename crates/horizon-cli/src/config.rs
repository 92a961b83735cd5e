//! CLI configuration file.
//!
//! Settings live in `horizon.toml`, either at the path given with
//! `--config` or in the platform config directory. Every field has a
//! default, so a missing file or a partial one is fine.
//!
//! ```toml
//! [output]
//! format = "json"
//! precision = 4
//!
//! [solver]
//! tolerance = 1e-10
//! max_iterations = 50
//! initial_guess = 0.04
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use horizon_bonds::pricing::DEFAULT_INITIAL_GUESS;
use horizon_bonds::YieldSolver;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// File name looked up in the config directory.
pub const CONFIG_FILE_NAME: &str = "horizon.toml";

/// Output settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    pub format: OutputFormat,
    /// Decimal places for prices and risk figures.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 6,
        }
    }
}

/// Yield solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Convergence tolerance on price.
    pub tolerance: f64,
    /// Newton iteration budget.
    pub max_iterations: u32,
    /// Starting yield (decimal).
    pub initial_guess: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let solver = YieldSolver::new();
        Self {
            tolerance: solver.config().tolerance,
            max_iterations: solver.config().max_iterations,
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }
}

impl SolverSettings {
    /// Builds the yield solver these settings describe.
    pub fn to_solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
            .with_initial_guess(self.initial_guess)
    }
}

/// Effective CLI configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Yield solver settings.
    pub solver: SolverSettings,
}

impl CliConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Checks the settings are usable.
    pub fn validate(&self) -> CliResult<()> {
        if !(self.solver.tolerance > 0.0 && self.solver.tolerance.is_finite()) {
            return Err(CliError::Config(format!(
                "solver.tolerance must be positive, got {}",
                self.solver.tolerance
            )));
        }
        if self.solver.max_iterations == 0 {
            return Err(CliError::Config("solver.max_iterations must be at least 1".into()));
        }
        if !self.solver.initial_guess.is_finite() {
            return Err(CliError::Config("solver.initial_guess must be finite".into()));
        }
        if self.output.precision > 12 {
            return Err(CliError::Config(format!(
                "output.precision must be at most 12, got {}",
                self.output.precision
            )));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("horizon").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CliConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 6);
        assert_eq!(config.solver, SolverSettings::default());
    }

    #[test]
    fn test_solver_settings() {
        let config: CliConfig =
            toml::from_str("[solver]\ntolerance = 1e-10\nmax_iterations = 50\n").unwrap();
        let solver = config.solver.to_solver();

        assert_eq!(solver.config().max_iterations, 50);
        assert!((solver.initial_guess() - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate() {
        let mut config = CliConfig::default();
        assert!(config.validate().is_ok());

        config.solver.max_iterations = 0;
        assert!(config.validate().is_err());

        config = CliConfig::default();
        config.solver.tolerance = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
