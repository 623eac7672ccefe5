use std::env;

use supabase_admin::{AdminConfig, AdminError, SupabaseAdmin, admin};

// Mutates the process environment, so it is the only test in this binary.
#[test]
fn test_process_environment() {
    // SAFETY: no other thread in this test binary reads or writes the environment.
    unsafe {
        env::remove_var("SUPABASE_URL");
        env::remove_var("SUPABASE_SERVICE_KEY");
    }

    let err = AdminConfig::from_env().unwrap_err();
    assert_eq!(
        err.missing_variables(),
        &["SUPABASE_URL", "SUPABASE_SERVICE_KEY"]
    );
    assert!(matches!(
        admin::init(),
        Err(AdminError::MissingConfiguration(_))
    ));
    assert!(admin::supabase_admin().is_none());

    unsafe {
        env::set_var("SUPABASE_URL", "");
        env::set_var("SUPABASE_SERVICE_KEY", "k1");
    }
    let err = SupabaseAdmin::from_env().unwrap_err();
    assert_eq!(err.missing_variables(), &["SUPABASE_URL"]);

    unsafe {
        env::set_var("SUPABASE_URL", "https://x.example");
    }
    let handle = admin::init().unwrap();
    assert_eq!(handle.config().url(), "https://x.example");
    assert_eq!(handle.config().service_key(), "k1");
    assert!(!handle.persist_session());

    // Once set, the handle no longer depends on the environment
    unsafe {
        env::remove_var("SUPABASE_URL");
    }
    let again = admin::init().unwrap();
    assert!(std::ptr::eq(handle, again));

    // Values that are not valid unicode count as missing
    #[cfg(unix)]
    {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        unsafe {
            env::set_var("SUPABASE_URL", OsString::from_vec(vec![0xff]));
            env::set_var("SUPABASE_SERVICE_KEY", "k1");
        }
        let err = AdminConfig::from_env().unwrap_err();
        assert_eq!(err.missing_variables(), &["SUPABASE_URL"]);
    }
}
