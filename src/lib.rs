/// supabase-admin - a service-role Supabase client configured from the environment.
///
/// The crate reads `SUPABASE_URL` and `SUPABASE_SERVICE_KEY`, refuses to build
/// anything if either is missing, and produces a single client handle with
/// session persistence disabled for trusted server-side use.
///
/// # Architecture
///
/// - `core::config` holds the endpoint/key pair
/// - `core::options` mirrors the SDK client options (`{auth: {persistSession: false}}`)
/// - `clients::SupabaseAdmin` is the handle, built on reqwest
/// - `admin` keeps one process-wide handle for applications that want it
///
/// # Example
///
/// ```no_run
/// use supabase_admin::core::config::AdminConfig;
/// use supabase_admin::clients::SupabaseAdmin;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     supabase_admin::setup_logging();
///
///     // Fail fast at startup if the environment is incomplete
///     let admin = supabase_admin::admin::init()?;
///
///     // Or construct one explicitly, e.g. in tests
///     let config = AdminConfig::new("https://x.example", "dummy_service_key")?;
///     let _local = SupabaseAdmin::new(config)?;
///
///     let rows = admin
///         .from("profiles")
///         .query(&[("select", "*")])
///         .send()
///         .await?
///         .text()
///         .await?;
///     println!("{rows}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod admin;
pub mod clients;
pub mod core;
pub mod errors;

pub use crate::clients::SupabaseAdmin;
pub use crate::core::config::AdminConfig;
pub use crate::errors::AdminError;

/// Configure structured logging with JSON output.
///
/// The level filter comes from `RUST_LOG` and falls back to `info`. Calling
/// this more than once is harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```
/// supabase_admin::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
