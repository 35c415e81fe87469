//! Configuration resolution
//!
//! Search order, first hit wins:
//!
//! 1. `r53q.json` next to the running executable
//! 2. `~/.config/r53q.json`
//! 3. `/etc/r53q.json`
//! 4. `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_REGION` / `AWS_DEFAULT_REGION`
//!
//! A file that exists but does not decode stops the search with
//! [`CoreError::ConfigRead`]. When no source is found an empty placeholder is
//! written to the working directory and returned as [`ConfigSource::CreatedEmpty`].

mod strategy;

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use r53q_provider::AwsCredentials;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use strategy::{
    ConfigStrategy, EnvironmentStrategy, FileStrategy, Lookup, ENV_ACCESS_KEY, ENV_REGION,
    ENV_SECRET_KEY,
};

/// File name searched for in every config directory.
pub const CONFIG_FILE_NAME: &str = "r53q.json";
/// System-wide config path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/r53q.json";

/// Credentials and region, as stored in `r53q.json`
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

impl Configuration {
    /// Provider credentials for this configuration.
    pub fn credentials(&self) -> AwsCredentials {
        AwsCredentials {
            access_key_id: self.access_key.clone(),
            secret_access_key: self.secret_key.clone(),
            region: self.region.clone(),
        }
    }
}

/// Where a [`ResolvedConfig`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Environment,
    /// Nothing was found; an empty placeholder file was written.
    CreatedEmpty,
    /// Nothing was found and a file already sits at the placeholder path,
    /// outside the search order. It was left untouched.
    Occupied,
}

/// A configuration plus its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub config: Configuration,
    pub source: ConfigSource,
    /// The file read or created; `None` for the environment.
    pub path: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Refuse configurations that cannot authenticate.
    ///
    /// A freshly created placeholder yields [`CoreError::ConfigMissing`] and an
    /// occupied placeholder path [`CoreError::ConfigNotSearched`]; a found
    /// config with an empty access key or secret key yields
    /// [`CoreError::IncompleteConfig`]. The region may be empty.
    pub fn require_usable(self) -> CoreResult<Self> {
        match self.source {
            ConfigSource::CreatedEmpty => Err(CoreError::ConfigMissing {
                path: self.path.unwrap_or_default(),
            }),
            ConfigSource::Occupied => Err(CoreError::ConfigNotSearched {
                path: self.path.unwrap_or_default(),
            }),
            ConfigSource::File | ConfigSource::Environment
                if self.config.access_key.is_empty() || self.config.secret_key.is_empty() =>
            {
                Err(CoreError::IncompleteConfig {
                    origin: self.origin(),
                })
            }
            ConfigSource::File | ConfigSource::Environment => Ok(self),
        }
    }

    /// The config path, or `"environment"`.
    pub fn origin(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "environment".to_string(),
        }
    }
}

/// Directories the resolver looks in
#[derive(Debug, Clone, Default)]
pub struct ConfigLocations {
    /// Directory holding the running executable.
    pub executable_dir: Option<PathBuf>,
    /// The user's home directory.
    pub home_dir: Option<PathBuf>,
    /// Full path of the system-wide config file.
    pub system_path: PathBuf,
    /// Where the placeholder is written.
    pub working_dir: Option<PathBuf>,
}

impl ConfigLocations {
    /// Locations for the running process.
    pub fn detect() -> Self {
        Self {
            executable_dir: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            home_dir: dirs::home_dir(),
            system_path: PathBuf::from(SYSTEM_CONFIG_PATH),
            working_dir: std::env::current_dir().ok(),
        }
    }

    /// Config files in search order.
    pub fn file_candidates(&self) -> Vec<PathBuf> {
        let mut files = Vec::with_capacity(3);
        if let Some(dir) = &self.executable_dir {
            files.push(dir.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = &self.home_dir {
            files.push(home.join(".config").join(CONFIG_FILE_NAME));
        }
        files.push(self.system_path.clone());
        files
    }
}

/// Tries each [`ConfigStrategy`] in order
pub struct ConfigResolver {
    strategies: Vec<Box<dyn ConfigStrategy>>,
    working_dir: Option<PathBuf>,
}

impl ConfigResolver {
    /// The standard search order over `locations`, with `environment` last.
    pub fn new(locations: ConfigLocations, environment: EnvironmentStrategy) -> Self {
        let mut strategies: Vec<Box<dyn ConfigStrategy>> = locations
            .file_candidates()
            .into_iter()
            .map(|path| Box::new(FileStrategy::new(path)) as Box<dyn ConfigStrategy>)
            .collect();
        strategies.push(Box::new(environment));

        Self {
            strategies,
            working_dir: locations.working_dir,
        }
    }

    /// The standard search order for the running process.
    pub fn from_process() -> Self {
        Self::new(ConfigLocations::detect(), EnvironmentStrategy::from_process())
    }

    /// Resolve the configuration, creating the placeholder if nothing is found.
    pub fn resolve(&self) -> CoreResult<ResolvedConfig> {
        for strategy in &self.strategies {
            match strategy.lookup() {
                Lookup::Found(resolved) => {
                    log::debug!("config loaded from {}", strategy.describe());
                    return Ok(resolved);
                }
                Lookup::Malformed { path, detail } => {
                    return Err(CoreError::ConfigRead { path, detail });
                }
                Lookup::Absent => log::debug!("no config at {}", strategy.describe()),
            }
        }

        let dir = self.working_dir.as_deref().ok_or_else(|| CoreError::ConfigWrite {
            path: PathBuf::from(CONFIG_FILE_NAME),
            detail: "working directory unavailable".to_string(),
        })?;
        let path = dir.join(CONFIG_FILE_NAME);
        let source = if write_placeholder(&path)? {
            ConfigSource::CreatedEmpty
        } else {
            ConfigSource::Occupied
        };

        Ok(ResolvedConfig {
            config: Configuration::default(),
            source,
            path: Some(path),
        })
    }
}

/// Write an empty config at `path` unless a file is already there.
///
/// Returns whether the file was written.
fn write_placeholder(path: &Path) -> CoreResult<bool> {
    let write_error = |e: &dyn fmt::Display| CoreError::ConfigWrite {
        path: path.to_path_buf(),
        detail: e.to_string(),
    };

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            log::debug!("{} already exists; leaving it untouched", path.display());
            return Ok(false);
        }
        Err(e) => return Err(write_error(&e)),
    };

    let body = serde_json::to_string_pretty(&Configuration::default())
        .map_err(|e| write_error(&e))?;
    file.write_all(body.as_bytes())
        .map_err(|e| write_error(&e))?;
    log::debug!("no config found; wrote placeholder {}", path.display());
    Ok(true)
}
