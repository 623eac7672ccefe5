use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SCHEMA: &str = "public";

/// Options handed to the client constructor, in the same shape the hosted
/// SDK accepts (`{auth: {persistSession: false}}` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    pub auth: AuthOptions,
    #[serde(default)]
    pub db: DbOptions,
    #[serde(default)]
    pub global: GlobalOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOptions {
    pub persist_session: bool,
    pub auto_refresh_token: bool,
    pub detect_session_in_url: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbOptions {
    pub schema: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalOptions {
    pub headers: BTreeMap<String, String>,
}

impl ClientOptions {
    /// Server-side options: nothing is cached between calls and there is no
    /// browser session to pick up or refresh.
    #[must_use]
    pub fn admin() -> Self {
        Self {
            auth: AuthOptions {
                persist_session: false,
                auto_refresh_token: false,
                detect_session_in_url: false,
            },
            db: DbOptions::default(),
            global: GlobalOptions::default(),
        }
    }
}

impl Default for DbOptions {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
        }
    }
}
