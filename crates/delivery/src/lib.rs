//! Webhook delivery infrastructure.
//!
//! Wires the [`collectors::PayloadAssembler`] to the HTTP
//! [`DeliveryChannel`] behind a single entry point, [`WebhookNotifier`]:
//! one instance per triggering event, one blocking `send_notification` call,
//! no retries and no error return. Everything observable about a delivery —
//! success, failure, degraded payload sections — lives in the build's audit
//! log and the operator's `tracing` output.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL parsing, proxy routing, client construction, and
//! request execution all live here. The [`collectors`] crate never sees a
//! socket.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`proxy`] | Ambient proxy resolution (`HTTP_PROXY`/`HTTPS_PROXY`) |
//! | [`channel`] | The single-attempt POST channel |

pub mod channel;
pub mod proxy;

#[cfg(test)]
mod testing;

pub use channel::{DeliveryChannel, DeliveryConfig, DeliveryOutcome, DEFAULT_TIMEOUT};
pub use proxy::{ProxyConfig, ProxyEndpoint};

use collectors::{Collaborators, PayloadAssembler};
use payload::{BuildSummary, Notification, PlanRef};

/// One notification transport: assembles the document for its event and
/// POSTs it to the webhook endpoint.
///
/// A notifier is bound to one plan/build pair at construction (either may be
/// absent for plan-less or summary-less events) and holds one HTTP client
/// for its lifetime. Concurrent builds each construct their own notifier;
/// the shared stores behind [`Collaborators`] are read-only.
pub struct WebhookNotifier {
    assembler: PayloadAssembler,
    channel: DeliveryChannel,
}

impl WebhookNotifier {
    pub fn new(
        webhook_url: &str,
        plan: Option<PlanRef>,
        build: Option<BuildSummary>,
        collaborators: Collaborators,
        config: DeliveryConfig,
    ) -> Self {
        let assembler = PayloadAssembler::new(plan, build, collaborators);
        let channel = DeliveryChannel::new(webhook_url, &config, assembler.auditor().clone());
        Self { assembler, channel }
    }

    /// Assembles and delivers one notification, blocking until done.
    ///
    /// Never fails from the caller's point of view: all failure information
    /// is surfaced exclusively through the two logging channels. The
    /// returned outcome is informational.
    pub fn send_notification(&self, notification: &Notification) -> DeliveryOutcome {
        self.assembler.auditor().info("Sending notification");
        let payload = self.assembler.assemble(notification);
        self.channel.send(&payload)
    }
}
