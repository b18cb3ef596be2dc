//! Configuration loading.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use figment::Figment;
use figment::providers::Serialized;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the output file.
pub const OUTPUT_PATH_ENV: &str = "ANSIBLE_CSV_PATH";

/// Output file used when [`OUTPUT_PATH_ENV`] is unset, relative to the
/// current directory.
pub const DEFAULT_OUTPUT_FILE: &str = "task_times.csv";

/// Recorder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the timings file is written, before home expansion.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Loads configuration from the environment.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_env_value(env::var_os(OUTPUT_PATH_ENV))
    }

    /// Builds configuration from the raw value of [`OUTPUT_PATH_ENV`].
    ///
    /// The value is taken verbatim as a path: `2026` or `true` are file
    /// names, and bytes that are not UTF-8 are kept as they are.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn from_env_value(raw: Option<OsString>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(value) = raw.as_deref().and_then(OsStr::to_str) {
            figment = figment.merge(Serialized::default("output_path", value));
        }

        let mut config: Self = figment.extract()?;
        if let Some(value) = raw.filter(|v| v.to_str().is_none()) {
            config.output_path = PathBuf::from(value);
        }
        Ok(config)
    }

    /// The output path with a leading `~` expanded.
    ///
    /// An empty path falls back to [`DEFAULT_OUTPUT_FILE`].
    pub fn resolved_output_path(&self) -> PathBuf {
        if self.output_path.as_os_str().is_empty() {
            return PathBuf::from(DEFAULT_OUTPUT_FILE);
        }
        expand_home(&self.output_path)
    }
}

/// Replaces a leading `~` component with the user's home directory.
///
/// `~user` forms are left untouched, as is the whole path when no home
/// directory can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let Some(home) = dirs::home_dir() else {
                return path.to_path_buf();
            };
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                home
            } else {
                home.join(rest)
            }
        }
        _ => path.to_path_buf(),
    }
}
