//! Client modules for external API interactions

pub mod supabase_client;

pub use supabase_client::{SupabaseAdmin, without_credentials};
