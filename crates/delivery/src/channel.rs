//! The HTTP delivery channel.
//!
//! One channel wraps one destination URL and one reused blocking client.
//! Construction parses the URL and picks a proxy route by scheme; a
//! malformed URL leaves the channel unconfigured so later sends fail
//! cleanly instead of crashing. `send` makes exactly one attempt — the
//! no-retry policy is a contract of this boundary, not an accident.

use std::time::Duration;

use payload::{Auditor, NotificationPayload};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Url;

use crate::proxy::ProxyConfig;

/// Transport-level timeout applied when the caller does not pick one.
/// Deliberately explicit: an unbounded send would block the build's
/// completion path.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the channel needs besides the destination URL.
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    pub proxies: ProxyConfig,
    pub timeout: Duration,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            proxies: ProxyConfig::from_env(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// What happened to one delivery attempt.
///
/// Informational only — the caller is free to ignore it; every outcome has
/// already been written to the logs by the time it is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The endpoint answered; any status counts as delivered.
    Sent { status: u16 },
    /// Serialization or transport failed; details are in the logs.
    Failed,
    /// The channel was constructed from a malformed URL and cannot send.
    NotConfigured,
}

/// Synchronous, single-attempt POST channel to one webhook endpoint.
pub struct DeliveryChannel {
    endpoint: Option<Endpoint>,
    auditor: Auditor,
}

struct Endpoint {
    url: Url,
    client: Client,
}

impl DeliveryChannel {
    /// Parses the destination and builds the client, routing through the
    /// scheme's proxy when one is configured.
    pub fn new(webhook_url: &str, config: &DeliveryConfig, auditor: Auditor) -> Self {
        let endpoint = match Url::parse(webhook_url) {
            Ok(url) => match build_client(&url, config) {
                Ok(client) => Some(Endpoint { url, client }),
                Err(err) => {
                    auditor.error(&format!("Unable to set up the HTTP client: {err}"));
                    tracing::error!(url = webhook_url, error = %err, "client construction failed");
                    None
                }
            },
            Err(err) => {
                auditor.error(&format!("Error parsing webhook url: {err}"));
                tracing::error!(url = webhook_url, error = %err, "invalid webhook url");
                None
            }
        };

        Self { endpoint, auditor }
    }

    /// Whether construction produced a usable endpoint.
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// POSTs the payload once. The `secret` field doubles as the
    /// `Authorization` header value.
    ///
    /// There is no retry here or anywhere above this call; re-notification
    /// policy belongs to the orchestration layer.
    pub fn send(&self, payload: &NotificationPayload) -> DeliveryOutcome {
        let Some(endpoint) = &self.endpoint else {
            self.auditor
                .error("Webhook url is not configured, notification dropped");
            return DeliveryOutcome::NotConfigured;
        };

        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(err) => {
                self.auditor
                    .error(&format!("Error serializing notification payload: {err}"));
                tracing::error!(error = %err, "payload serialization failed");
                return DeliveryOutcome::Failed;
            }
        };

        self.auditor
            .info(&format!("Executing call to {}", endpoint.url));
        tracing::debug!(url = %endpoint.url, bytes = body.len(), "sending notification");

        let result = endpoint
            .client
            .post(endpoint.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, payload.secret.as_str())
            .body(body)
            .send();

        match result {
            Ok(response) => {
                self.auditor.info("Call executed");
                let status = response.status();
                self.auditor
                    .info(&format!("Status code is: {}", status.as_u16()));

                match response.text() {
                    Ok(text) if !text.is_empty() => {
                        self.auditor.info(&format!("Response body is: {text}"));
                    }
                    Ok(_) => {}
                    Err(err) => {
                        self.auditor
                            .error(&format!("Error reading response body: {err}"));
                    }
                }

                DeliveryOutcome::Sent {
                    status: status.as_u16(),
                }
            }
            Err(err) => {
                self.auditor
                    .error(&format!("Error while sending payload: {err}"));
                tracing::error!(url = %endpoint.url, error = %err, "notification delivery failed");
                DeliveryOutcome::Failed
            }
        }
    }
}

fn build_client(url: &Url, config: &DeliveryConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().timeout(config.timeout);
    match config.proxies.for_scheme(url.scheme()) {
        Some(proxy) => builder = builder.proxy(reqwest::Proxy::all(proxy.url())?),
        // The channel's routing is decided here, not by the client's own
        // environment scan.
        None => builder = builder.no_proxy(),
    }
    builder.build()
}
