use crate::month::DEFAULT_FISCAL_START;
use crate::store::ProfileStore;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the directory holding the profile file.
pub const HOME_ENV: &str = "TDPROFILE_HOME";
/// Overrides the first month of the fiscal year (1..=12).
pub const FISCAL_START_ENV: &str = "TDPROFILE_FISCAL_START";

const PROFILES_FILE_NAME: &str = "profiles.json";

/// Resolved settings with builder chaining. Nothing here touches the
/// filesystem until [`Settings::ensure_initialized`] is called.
#[derive(Clone, Debug)]
pub struct Settings {
    pub home: PathBuf,
    pub profiles_file: PathBuf,   // defaults to home/profiles.json
    pub fiscal_start_month: u8,   // 1..=12
}

impl Default for Settings {
    fn default() -> Self {
        let home = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tdprofile");
        Self {
            profiles_file: home.join(PROFILES_FILE_NAME),
            home,
            fiscal_start_month: DEFAULT_FISCAL_START,
        }
    }
}

impl Settings {
    /// Defaults overlaid with `TDPROFILE_HOME` and `TDPROFILE_FISCAL_START`.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(home) = std::env::var(HOME_ENV) {
            if !home.trim().is_empty() {
                settings = settings.with_home(home.trim());
            }
        }

        if let Ok(raw) = std::env::var(FISCAL_START_ENV) {
            match raw.trim().parse::<u8>() {
                Ok(m) if (1..=12).contains(&m) => settings.fiscal_start_month = m,
                _ => tracing::warn!("{} is set but not a month number 1..=12: {:?}", FISCAL_START_ENV, raw),
            }
        }

        settings
    }

    pub fn with_home(mut self, home: impl AsRef<Path>) -> Self {
        let home = home.as_ref().to_path_buf();
        self.profiles_file = home.join(PROFILES_FILE_NAME);
        self.home = home;
        self
    }

    pub fn with_profiles_file(mut self, path: impl AsRef<Path>) -> Self {
        self.profiles_file = path.as_ref().to_path_buf();
        self
    }

    pub fn with_fiscal_start_month(mut self, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow!("fiscal start month must be 1..=12, got {month}"));
        }
        self.fiscal_start_month = month;
        Ok(self)
    }

    /// Create the profile file's directory and an empty profile list if they
    /// are missing. The home directory is only created when the profile file
    /// lives under it. Returns the profile file path.
    pub fn ensure_initialized(&self) -> Result<PathBuf> {
        if self.profiles_file.starts_with(&self.home) {
            fs::create_dir_all(&self.home)
                .with_context(|| format!("create profile home {}", self.home.display()))?;
        }
        if let Some(parent) = self.profiles_file.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        if !self.profiles_file.exists() {
            tracing::info!(path = %self.profiles_file.display(), "creating empty profile list");
            ProfileStore::load(&self.profiles_file)?.save()?;
        }
        Ok(self.profiles_file.clone())
    }
}
