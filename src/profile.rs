//! Connection profile record. The password is obscured with base64 so it is
//! not stored as plain text; this is not encryption.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub username: String,
    pub url: String,
    #[serde(rename = "password")]
    obscured_password: String,
}

impl Profile {
    /// Name, username and url must be non-empty after trimming. The password
    /// is taken as-is (empty is allowed).
    pub fn new(
        name: impl AsRef<str>,
        username: impl AsRef<str>,
        url: impl AsRef<str>,
        password: impl AsRef<str>,
    ) -> Result<Self> {
        let name = name.as_ref().trim();
        let username = username.as_ref().trim();
        let url = url.as_ref().trim();
        for (field, value) in [("name", name), ("username", username), ("url", url)] {
            if value.is_empty() {
                return Err(anyhow!("profile {field} must not be empty"));
            }
        }
        Ok(Self {
            name: name.to_string(),
            username: username.to_string(),
            url: url.to_string(),
            obscured_password: B64.encode(password.as_ref().as_bytes()),
        })
    }

    /// Decoded password.
    pub fn password(&self) -> Result<String> {
        let bytes = B64
            .decode(self.obscured_password.as_bytes())
            .with_context(|| format!("profile {} has a corrupt password field", self.name))?;
        String::from_utf8(bytes).with_context(|| format!("profile {} password is not UTF-8", self.name))
    }

    /// The stored (base64) form.
    pub fn obscured_password(&self) -> &str {
        &self.obscured_password
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile <{}@{}>", self.username, self.url)
    }
}
