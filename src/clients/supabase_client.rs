//! Supabase admin client module
//!
//! Holds the service-role credentials and hands out pre-authorized request
//! builders for the REST, auth, storage and edge-function APIs. Nothing here
//! touches the network until the caller sends a request.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use std::fmt;
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::core::config::AdminConfig;
use crate::core::options::ClientOptions;
use crate::errors::AdminError;

const API_KEY_HEADER: &str = "apikey";
const CLIENT_INFO_HEADER: &str = "x-client-info";
const CLIENT_INFO: &str = concat!("supabase-admin-rs/", env!("CARGO_PKG_VERSION"));
const ACCEPT_PROFILE_HEADER: &str = "accept-profile";
const CONTENT_PROFILE_HEADER: &str = "content-profile";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Service-role client handle.
///
/// Cheap to clone; clones share the same connection pool. Session
/// persistence is always off.
#[derive(Clone)]
pub struct SupabaseAdmin {
    config: AdminConfig,
    options: ClientOptions,
    rest_url: Url,
    auth_url: Url,
    storage_url: Url,
    functions_url: Url,
    realtime_url: Url,
    headers: HeaderMap,
    http: Client,
}

impl SupabaseAdmin {
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute http(s) URL or the
    /// key cannot be carried in a header.
    pub fn new(config: AdminConfig) -> Result<Self, AdminError> {
        Self::with_options(config, ClientOptions::admin())
    }

    /// Build from `SUPABASE_URL` and `SUPABASE_SERVICE_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::MissingConfiguration` if either variable is absent
    /// or empty, otherwise the same errors as [`SupabaseAdmin::new`].
    pub fn from_env() -> Result<Self, AdminError> {
        Self::new(AdminConfig::from_env()?)
    }

    /// Build with custom schema or global headers. `persist_session` is
    /// forced off regardless of what `options` says.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid, a header is malformed, or
    /// a global header tries to replace one of the auth headers.
    pub fn with_options(
        config: AdminConfig,
        mut options: ClientOptions,
    ) -> Result<Self, AdminError> {
        options.auth.persist_session = false;

        let base = parse_base_url(config.url())?;
        let rest_url = base.join("rest/v1")?;
        let auth_url = base.join("auth/v1")?;
        let storage_url = base.join("storage/v1")?;
        let functions_url = base.join("functions/v1")?;
        let realtime_url = to_websocket(base.join("realtime/v1")?)?;

        let headers = build_headers(config.service_key(), &options)?;

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        info!(
            "Initialized Supabase admin client for {}",
            without_credentials(&base)
        );
        #[cfg(feature = "debug-logs")]
        info!("Supabase client options: {:?}", options);

        Ok(Self {
            config,
            options,
            rest_url,
            auth_url,
            storage_url,
            functions_url,
            realtime_url,
            headers,
            http,
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    #[must_use]
    pub fn persist_session(&self) -> bool {
        self.options.auth.persist_session
    }

    #[must_use]
    pub fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    #[must_use]
    pub fn auth_url(&self) -> &Url {
        &self.auth_url
    }

    #[must_use]
    pub fn storage_url(&self) -> &Url {
        &self.storage_url
    }

    #[must_use]
    pub fn functions_url(&self) -> &Url {
        &self.functions_url
    }

    #[must_use]
    pub fn realtime_url(&self) -> &Url {
        &self.realtime_url
    }

    /// Headers attached to every request built by this handle.
    #[must_use]
    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Underlying HTTP client, for requests the builders below don't cover.
    #[must_use]
    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Any request against the project, authorized with the service key.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url).headers(self.headers.clone())
    }

    /// `GET {rest}/{table}` scoped to the configured schema.
    pub fn from(&self, table: &str) -> RequestBuilder {
        self.request(Method::GET, &endpoint(&self.rest_url, table))
            .header(ACCEPT_PROFILE_HEADER, self.options.db.schema.as_str())
    }

    /// `POST {rest}/rpc/{function}` scoped to the configured schema.
    pub fn rpc(&self, function: &str) -> RequestBuilder {
        let path = format!("rpc/{}", function.trim_start_matches('/'));
        self.request(Method::POST, &endpoint(&self.rest_url, &path))
            .header(CONTENT_PROFILE_HEADER, self.options.db.schema.as_str())
    }

    pub fn storage_object(&self, bucket: &str, path: &str) -> RequestBuilder {
        let path = format!(
            "object/{}/{}",
            bucket.trim_matches('/'),
            path.trim_start_matches('/')
        );
        self.request(Method::GET, &endpoint(&self.storage_url, &path))
    }

    /// `POST {functions}/{function}` for an edge function.
    pub fn invoke(&self, function: &str) -> RequestBuilder {
        self.request(Method::POST, &endpoint(&self.functions_url, function))
    }

    /// `GET {auth}/admin/{path}`, e.g. `users`.
    pub fn auth_admin(&self, path: &str) -> RequestBuilder {
        let path = format!("admin/{}", path.trim_start_matches('/'));
        self.request(Method::GET, &endpoint(&self.auth_url, &path))
    }
}

impl fmt::Debug for SupabaseAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseAdmin")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("rest_url", &without_credentials(&self.rest_url).as_str())
            .finish_non_exhaustive()
    }
}

fn parse_base_url(raw: &str) -> Result<Url, AdminError> {
    let mut with_slash = raw.to_string();
    if !with_slash.ends_with('/') {
        with_slash.push('/');
    }

    let url = Url::parse(&with_slash)?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AdminError::InvalidUrl(format!(
                "unsupported scheme '{other}', expected http or https"
            )));
        }
    }
    if url.host_str().is_none() {
        return Err(AdminError::InvalidUrl("missing host".to_string()));
    }

    Ok(url)
}

/// Copy of `url` with any `user:password@` part removed, for logging.
#[must_use]
pub fn without_credentials(url: &Url) -> Url {
    let mut url = url.clone();
    // Only fails for URLs that cannot carry credentials in the first place
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url
}

fn to_websocket(mut url: Url) -> Result<Url, AdminError> {
    let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
    url.set_scheme(scheme)
        .map_err(|()| AdminError::InvalidUrl(format!("cannot switch {url} to {scheme}")))?;
    Ok(url)
}

fn endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn build_headers(service_key: &str, options: &ClientOptions) -> Result<HeaderMap, AdminError> {
    let mut headers = HeaderMap::new();

    let mut api_key = HeaderValue::from_str(service_key)?;
    api_key.set_sensitive(true);
    headers.insert(API_KEY_HEADER, api_key);

    let mut bearer = HeaderValue::from_str(&format!("Bearer {service_key}"))?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    headers.insert(CLIENT_INFO_HEADER, HeaderValue::from_static(CLIENT_INFO));

    for (name, value) in &options.global.headers {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        if name == AUTHORIZATION || name == API_KEY_HEADER || name == CLIENT_INFO_HEADER {
            return Err(AdminError::InvalidHeader(format!(
                "'{name}' is set from the service key and cannot be overridden"
            )));
        }
        headers.insert(name, HeaderValue::from_str(value)?);
    }

    Ok(headers)
}
