//! Configuration inputs for the admin client

pub mod config;
pub mod options;

pub use config::{AdminConfig, SUPABASE_SERVICE_KEY, SUPABASE_URL};
pub use options::{AuthOptions, ClientOptions, DbOptions, GlobalOptions};
