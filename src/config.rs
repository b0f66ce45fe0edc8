use std::path::Path;
use std::path::PathBuf;

/// Environment variable naming the data directory.
pub const HOME_VAR: &str = "SAMLOC_HOME";
/// Data directory used when neither a flag nor the environment names one.
pub const HOME_DEFAULT: &str = ".samloc";

/// Runtime configuration: where the session snapshot and logs live, and
/// how chatty the terminal logger is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    home: PathBuf,
    verbose: bool,
}

impl Config {
    pub fn new(home: PathBuf, verbose: bool) -> Self {
        Self { home, verbose }
    }
    /// Reads `SAMLOC_HOME`, falling back to `./.samloc`.
    pub fn from_env() -> Self {
        let home = std::env::var_os(HOME_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(HOME_DEFAULT));
        Self::new(home, false)
    }
    /// Flag values win over whatever the environment said.
    pub fn with(self, home: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            home: home.unwrap_or(self.home),
            verbose: verbose || self.verbose,
        }
    }
    pub fn home(&self) -> &Path {
        &self.home
    }
    pub fn verbose(&self) -> bool {
        self.verbose
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Warn,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from(HOME_DEFAULT), false)
    }
}
