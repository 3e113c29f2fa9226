use cbcast_core::channel::Directive;

use crate::host::{DeviceIdentity, PreferenceSource, RadioControl, SubId, SubscriptionSource};
use crate::obs::ConfigMetrics;
use crate::policy::{carrier_emergency_range, evaluate, IdentityContext, PreferenceSet};

/// Subscription that receives the enabled directive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Sub(SubId),
    /// No SMS/data default and no active subscription.
    NoSim,
}

/// SMS default, then data default, then first active subscription.
///
/// A default that is not in `active` still wins; every active subscription
/// is then treated as non-target.
pub fn resolve_target(active: &[SubId], default_sms: Option<SubId>, default_data: Option<SubId>) -> Target {
    default_sms
        .or(default_data)
        .or_else(|| active.first().copied())
        .map_or(Target::NoSim, Target::Sub)
}

/// How a subscription was configured in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Target,
    NonTarget,
    NoSimDefault,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Target => "target",
            Role::NonTarget => "non_target",
            Role::NoSimDefault => "no_sim_default",
        }
    }

    pub fn enabled(self) -> bool {
        !matches!(self, Role::NonTarget)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubReport {
    /// `None` for the no-SIM default radio.
    pub sub_id: Option<SubId>,
    pub role: Role,
    pub attempted: usize,
    pub failed: usize,
}

/// Outcome of one configuration pass. Informational; failures are never escalated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub subs: Vec<SubReport>,
}

impl ApplyReport {
    pub fn attempted(&self) -> usize {
        self.subs.iter().map(|s| s.attempted).sum()
    }

    pub fn failed(&self) -> usize {
        self.subs.iter().map(|s| s.failed).sum()
    }

    pub fn get(&self, sub_id: SubId) -> Option<&SubReport> {
        self.subs.iter().find(|s| s.sub_id == Some(sub_id))
    }
}

/// Issue each directive once. Returns `(attempted, failed)`.
pub fn apply_directives(
    radio: &dyn RadioControl,
    directives: &[Directive],
    metrics: &ConfigMetrics,
) -> (usize, usize) {
    let mut failed = 0;
    for d in directives {
        let ok = if d.enable {
            radio.enable_range(d.start(), d.end(), d.ran)
        } else {
            radio.disable_range(d.start(), d.end(), d.ran)
        };

        tracing::debug!(ran = d.ran.as_str(), range = %d.range, action = d.action(), origin = ?d.origin, ok, "directive");
        if !ok {
            failed += 1;
            tracing::warn!(ran = d.ran.as_str(), range = %d.range, action = d.action(), "radio rejected directive");
        }

        metrics.directives.inc(&[
            ("ran", d.ran.as_str()),
            ("action", d.action()),
            ("outcome", if ok { "ok" } else { "failed" }),
        ]);
    }
    (directives.len(), failed)
}

/// Evaluate and apply for one radio. Preferences and identity are read fresh.
pub fn configure_sub(
    prefs: &dyn PreferenceSource,
    device: &dyn DeviceIdentity,
    radio: &dyn RadioControl,
    sub_id: Option<SubId>,
    role: Role,
    metrics: &ConfigMetrics,
) -> SubReport {
    let pref_set = PreferenceSet::read(prefs, device);
    let identity = IdentityContext::read(device);
    let carrier = carrier_emergency_range(device, &identity);

    let directives = evaluate(&pref_set, &identity, carrier.as_deref(), role.enabled());
    metrics.evaluations.inc(&[("role", role.as_str())]);

    let (attempted, failed) = apply_directives(radio, &directives, metrics);
    SubReport {
        sub_id,
        role,
        attempted,
        failed,
    }
}

/// Configure every active subscription: enable the target, disable the rest.
///
/// With no active subscription the default radio gets the enabled set.
pub fn configure_all(
    prefs: &dyn PreferenceSource,
    device: &dyn DeviceIdentity,
    subs: &dyn SubscriptionSource,
    metrics: &ConfigMetrics,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    let active = subs.active_subscription_ids().unwrap_or_else(|| {
        tracing::warn!("subscription list unavailable; using no-SIM default");
        Vec::new()
    });

    if active.is_empty() {
        match subs.default_radio() {
            Some(radio) => {
                tracing::info!("no active subscription; configuring default radio");
                report
                    .subs
                    .push(configure_sub(prefs, device, radio, None, Role::NoSimDefault, metrics));
            }
            None => tracing::warn!("no active subscription and no default radio"),
        }
        return report;
    }

    let target = resolve_target(&active, subs.default_sms_sub_id(), subs.default_data_sub_id());

    for &id in &active {
        let Some(radio) = subs.radio_for(id) else {
            tracing::warn!(sub_id = id, "no radio for subscription; skipping");
            continue;
        };

        let role = if target == Target::Sub(id) {
            tracing::info!(sub_id = id, "enable cell broadcast on sub");
            Role::Target
        } else {
            // Multi-SIM only: avoid duplicate alerts from several carriers.
            tracing::info!(sub_id = id, "disable cell broadcast on sub");
            Role::NonTarget
        };

        report
            .subs
            .push(configure_sub(prefs, device, radio, Some(id), role, metrics));
    }

    report
}
