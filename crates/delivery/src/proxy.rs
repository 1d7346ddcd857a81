//! Ambient proxy configuration.
//!
//! The proxy is owned by the environment, not by this crate: resolution
//! reads the conventional `HTTP_PROXY`/`HTTPS_PROXY` variables once at
//! construction time. Unparsable entries are ignored with a warning —
//! a broken proxy setting must never stop notifications from being built.

use reqwest::Url;

/// Proxy endpoints by URL scheme, as found in the environment.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    http: Option<ProxyEndpoint>,
    https: Option<ProxyEndpoint>,
}

/// Host and port of one proxy server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    pub host: String,
    pub port: u16,
}

impl ProxyEndpoint {
    /// The endpoint as a proxy URL understood by the HTTP client.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl ProxyConfig {
    /// Reads the conventional proxy variables from the environment, upper-
    /// and lower-case spellings both accepted.
    pub fn from_env() -> Self {
        Self {
            http: first_env(&["HTTP_PROXY", "http_proxy"])
                .and_then(|raw| parse_endpoint(&raw)),
            https: first_env(&["HTTPS_PROXY", "https_proxy"])
                .and_then(|raw| parse_endpoint(&raw)),
        }
    }

    /// A configuration with no proxies at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(http: Option<ProxyEndpoint>, https: Option<ProxyEndpoint>) -> Self {
        Self { http, https }
    }

    /// The proxy to route requests of the given scheme through, if any.
    pub fn for_scheme(&self, scheme: &str) -> Option<&ProxyEndpoint> {
        match scheme {
            "http" => self.http.as_ref(),
            "https" => self.https.as_ref(),
            _ => None,
        }
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
}

fn parse_endpoint(raw: &str) -> Option<ProxyEndpoint> {
    // Plain "host:port" settings are common; give them a scheme so the URL
    // parser accepts them.
    let candidate = if raw.contains("://") {
        raw.to_owned()
    } else {
        format!("http://{raw}")
    };

    match Url::parse(&candidate) {
        Ok(url) => {
            let host = url.host_str()?.to_owned();
            let port = url.port_or_known_default()?;
            Some(ProxyEndpoint { host, port })
        }
        Err(err) => {
            tracing::warn!(raw, error = %err, "ignoring unparsable proxy setting");
            None
        }
    }
}
