//! Process-wide admin client
//!
//! Call [`init`] once at startup; a missing `SUPABASE_URL` or
//! `SUPABASE_SERVICE_KEY` is fatal there and should abort the process.
//! Components that can take the handle by reference should prefer
//! [`SupabaseAdmin::new`] and explicit injection.

use once_cell::sync::OnceCell;
use tracing::error;

use crate::clients::SupabaseAdmin;
use crate::errors::AdminError;

static SUPABASE_ADMIN: OnceCell<SupabaseAdmin> = OnceCell::new();

/// Build the shared handle from the process environment.
///
/// The handle is created at most once. Later calls return the same handle
/// without reading the environment again. A failed call leaves nothing
/// behind, so it can be retried.
///
/// # Errors
///
/// Returns `AdminError::MissingConfiguration` if either variable is absent or
/// empty, or any error from [`SupabaseAdmin::new`].
pub fn init() -> Result<&'static SupabaseAdmin, AdminError> {
    init_with(SupabaseAdmin::from_env)
}

/// Like [`init`], but with the handle produced by `build`.
///
/// # Errors
///
/// Returns the error from `build` when the handle has not been set yet.
pub fn init_with<F>(build: F) -> Result<&'static SupabaseAdmin, AdminError>
where
    F: FnOnce() -> Result<SupabaseAdmin, AdminError>,
{
    SUPABASE_ADMIN.get_or_try_init(build).inspect_err(|e| {
        error!("Supabase admin client initialization failed: {}", e);
    })
}

/// The shared handle, or `None` if [`init`] has not succeeded yet.
#[must_use]
pub fn supabase_admin() -> Option<&'static SupabaseAdmin> {
    SUPABASE_ADMIN.get()
}
