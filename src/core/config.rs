use std::env;
use std::fmt;

use crate::errors::AdminError;

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_SERVICE_KEY: &str = "SUPABASE_SERVICE_KEY";

/// Endpoint and service-role key for the admin client.
///
/// Values are kept exactly as supplied. Both are guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminConfig {
    url: String,
    service_key: String,
}

impl AdminConfig {
    /// # Errors
    ///
    /// Returns `AdminError::MissingConfiguration` naming every empty value.
    pub fn new(
        url: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Result<Self, AdminError> {
        let url = url.into();
        let service_key = service_key.into();

        let mut missing = Vec::new();
        if url.is_empty() {
            missing.push(SUPABASE_URL);
        }
        if service_key.is_empty() {
            missing.push(SUPABASE_SERVICE_KEY);
        }
        if !missing.is_empty() {
            return Err(AdminError::MissingConfiguration(missing));
        }

        Ok(Self { url, service_key })
    }

    /// Reads `SUPABASE_URL` and `SUPABASE_SERVICE_KEY` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::MissingConfiguration` if either variable is unset,
    /// empty, or not valid unicode.
    pub fn from_env() -> Result<Self, AdminError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`AdminConfig::from_env`] but with the variables resolved by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::MissingConfiguration` if either value is absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdminError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(SUPABASE_URL).unwrap_or_default();
        let service_key = lookup(SUPABASE_SERVICE_KEY).unwrap_or_default();
        Self::new(url, service_key)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn service_key(&self) -> &str {
        &self.service_key
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("url", &self.url)
            .field("service_key", &"[REDACTED]")
            .finish()
    }
}
