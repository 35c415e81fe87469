//! Config lookup strategies
//!
//! Each strategy inspects one source and reports what it found. The resolver
//! tries them in order and stops at the first one that is not [`Lookup::Absent`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use super::{ConfigSource, Configuration, ResolvedConfig};

/// Environment variable holding the access key id.
pub const ENV_ACCESS_KEY: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const ENV_SECRET_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Region variables, first non-empty wins.
pub const ENV_REGION: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];

/// Outcome of probing one config source
#[derive(Debug)]
pub enum Lookup {
    /// The source exists and decoded cleanly.
    Found(ResolvedConfig),
    /// The source exists but cannot be used. Stops the search.
    Malformed { path: PathBuf, detail: String },
    /// Nothing here; try the next source.
    Absent,
}

/// One config source in the search order
pub trait ConfigStrategy {
    /// Short description for logs (a path or `"environment"`).
    fn describe(&self) -> String;

    /// Probe the source.
    fn lookup(&self) -> Lookup;
}

// ============ File ============

/// A JSON config file at a fixed path
#[derive(Debug, Clone)]
pub struct FileStrategy {
    path: PathBuf,
}

impl FileStrategy {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStrategy for FileStrategy {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn lookup(&self) -> Lookup {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                return Lookup::Absent;
            }
            Err(e) => {
                return Lookup::Malformed {
                    path: self.path.clone(),
                    detail: e.to_string(),
                }
            }
        };

        match serde_json::from_str::<Configuration>(&text) {
            Ok(config) => Lookup::Found(ResolvedConfig {
                config,
                source: ConfigSource::File,
                path: Some(self.path.clone()),
            }),
            Err(e) => Lookup::Malformed {
                path: self.path.clone(),
                detail: e.to_string(),
            },
        }
    }
}

// ============ Environment ============

type VarLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Credentials from `AWS_*` environment variables
///
/// Counts as found only when the access key, secret key and a region are all
/// non-empty.
pub struct EnvironmentStrategy {
    var: VarLookup,
}

impl EnvironmentStrategy {
    /// Read from the process environment.
    pub fn from_process() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    /// Read through `var` instead of the process environment.
    pub fn with_lookup(var: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self { var: Box::new(var) }
    }

    fn non_empty(&self, name: &str) -> Option<String> {
        (self.var)(name).filter(|v| !v.is_empty())
    }
}

impl fmt::Debug for EnvironmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentStrategy").finish_non_exhaustive()
    }
}

impl ConfigStrategy for EnvironmentStrategy {
    fn describe(&self) -> String {
        "environment".to_string()
    }

    fn lookup(&self) -> Lookup {
        let access_key = self.non_empty(ENV_ACCESS_KEY);
        let secret_key = self.non_empty(ENV_SECRET_KEY);
        let region = ENV_REGION.iter().find_map(|name| self.non_empty(name));

        match (access_key, secret_key, region) {
            (Some(access_key), Some(secret_key), Some(region)) => Lookup::Found(ResolvedConfig {
                config: Configuration {
                    access_key,
                    secret_key,
                    region,
                },
                source: ConfigSource::Environment,
                path: None,
            }),
            _ => Lookup::Absent,
        }
    }
}
