// Startup check: builds the shared admin client and exits non-zero if the
// environment is incomplete.

use anyhow::Context;
use supabase_admin::clients::without_credentials;
use tracing::info;

fn main() -> anyhow::Result<()> {
    supabase_admin::setup_logging();

    let admin = supabase_admin::admin::init().context("Supabase admin client unavailable")?;

    info!("REST endpoint: {}", without_credentials(admin.rest_url()));
    info!("Auth endpoint: {}", without_credentials(admin.auth_url()));
    info!("Storage endpoint: {}", without_credentials(admin.storage_url()));
    info!("Functions endpoint: {}", without_credentials(admin.functions_url()));
    info!("Realtime endpoint: {}", without_credentials(admin.realtime_url()));
    info!("Session persistence: {}", admin.persist_session());

    Ok(())
}
