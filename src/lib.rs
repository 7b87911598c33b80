mod config;
mod connect;
mod error;
mod month;
mod profile;
mod prompt;
mod store;
mod util;

pub use crate::config::{Settings, FISCAL_START_ENV, HOME_ENV};
pub use crate::error::MonthError;
pub use crate::month::{iter_months, Month, DEFAULT_FISCAL_START, MAX_YEAR, MIN_YEAR};

pub use crate::profile::Profile;
pub use crate::store::ProfileStore;

// Connection strings are formatting only; nothing here opens a driver handle.
pub use crate::connect::{connection_string, redacted, ConnectOptions, DEFAULT_DRIVER};

pub use crate::prompt::{prompt_missing, prompt_profile, ProfileAnswers};

// Logging setup for the binary.
pub use crate::util::init_tracing_once;
