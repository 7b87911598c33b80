//! ODBC-style connection strings built from a stored profile. No driver is
//! loaded here; callers hand the string to whatever opens the connection.

use crate::profile::Profile;
use anyhow::Result;

pub const DEFAULT_DRIVER: &str = "Teradata";

#[derive(Clone, Debug)]
pub struct ConnectOptions {
    pub driver: String,
    pub database: Option<String>,
    pub extra: Vec<(String, String)>, // appended in order
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self { driver: DEFAULT_DRIVER.to_string(), database: None, extra: Vec::new() }
    }
}

impl ConnectOptions {
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}

/// Brace-quote values that would otherwise break the `KEY=VALUE;` framing.
fn quote_value(v: &str) -> String {
    if v.contains([';', '{', '}']) || v.starts_with(' ') || v.ends_with(' ') {
        format!("{{{}}}", v.replace('}', "}}"))
    } else {
        v.to_string()
    }
}

fn render(profile: &Profile, opts: &ConnectOptions, password: &str) -> String {
    let mut parts = vec![
        format!("DRIVER={{{}}}", opts.driver),
        format!("DBCNAME={}", quote_value(&profile.url)),
        format!("UID={}", quote_value(&profile.username)),
        format!("PWD={}", password),
    ];
    if let Some(db) = &opts.database {
        parts.push(format!("DATABASE={}", quote_value(db)));
    }
    for (k, v) in &opts.extra {
        parts.push(format!("{}={}", k, quote_value(v)));
    }
    parts.join(";")
}

/// Full connection string including the decoded password.
pub fn connection_string(profile: &Profile, opts: &ConnectOptions) -> Result<String> {
    let password = profile.password()?;
    tracing::debug!(profile = %profile.name, "building connection string");
    Ok(render(profile, opts, &quote_value(&password)))
}

/// Same layout with the password masked, safe to print or log.
pub fn redacted(profile: &Profile, opts: &ConnectOptions) -> String {
    render(profile, opts, "***")
}
