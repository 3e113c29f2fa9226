//! Trigger entry point for channel configuration.
//!
//! The host's event loop (boot, radio reset, airplane-mode exit) calls
//! `handle_action` or `enable_channels`. Overlapping calls are serialised.

use std::sync::{Arc, Mutex};

use crate::apply::{configure_all, ApplyReport};
use crate::host::{DeviceIdentity, PreferenceSource, SubscriptionSource};
use crate::obs::ConfigMetrics;

/// The only trigger action this service reacts to.
pub const ACTION_ENABLE_CHANNELS: &str = "ACTION_ENABLE_CHANNELS";

pub struct ChannelConfigService {
    prefs: Arc<dyn PreferenceSource>,
    device: Arc<dyn DeviceIdentity>,
    subs: Arc<dyn SubscriptionSource>,
    metrics: Arc<ConfigMetrics>,
    gate: Mutex<()>,
}

impl ChannelConfigService {
    pub fn new(
        prefs: Arc<dyn PreferenceSource>,
        device: Arc<dyn DeviceIdentity>,
        subs: Arc<dyn SubscriptionSource>,
    ) -> Self {
        Self::with_metrics(prefs, device, subs, Arc::new(ConfigMetrics::default()))
    }

    pub fn with_metrics(
        prefs: Arc<dyn PreferenceSource>,
        device: Arc<dyn DeviceIdentity>,
        subs: Arc<dyn SubscriptionSource>,
        metrics: Arc<ConfigMetrics>,
    ) -> Self {
        Self {
            prefs,
            device,
            subs,
            metrics,
            gate: Mutex::new(()),
        }
    }

    pub fn metrics(&self) -> Arc<ConfigMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Dispatch a host action. Unknown actions are logged and ignored.
    pub fn handle_action(&self, action: &str) -> Option<ApplyReport> {
        if action != ACTION_ENABLE_CHANNELS {
            tracing::debug!(action, "ignoring unknown action");
            self.metrics.triggers.inc(&[("action", "ignored")]);
            return None;
        }
        self.metrics.triggers.inc(&[("action", "enable_channels")]);
        Some(self.enable_channels())
    }

    /// Evaluate and apply on every subscription. Never fails; see the report.
    pub fn enable_channels(&self) -> ApplyReport {
        // A poisoned gate only means an earlier pass panicked mid-way.
        // Directives are idempotent, so a full re-run is safe.
        let _guard = match self.gate.lock() {
            Ok(g) => g,
            Err(poisoned) => {
                tracing::warn!("config gate poisoned; continuing");
                poisoned.into_inner()
            }
        };

        let report = configure_all(&*self.prefs, &*self.device, &*self.subs, &self.metrics);
        tracing::info!(
            subs = report.subs.len(),
            attempted = report.attempted(),
            failed = report.failed(),
            "cell broadcast channels configured"
        );
        report
    }
}
