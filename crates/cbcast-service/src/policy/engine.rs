//! Channel policy evaluation.
//!
//! `evaluate` is a pure function: the same preferences, identity, carrier
//! text and target flag always produce the same ordered directive list.

use cbcast_core::channel::{
    parse_carrier_ranges, AlertClass, Directive, Origin, RanType, CHANNEL_TABLE,
    PRESIDENTIAL_CHANNELS,
};

use super::prefs::{IdentityContext, PreferenceSet};
use crate::host::PhoneType;

const COUNTRY_BRAZIL: &str = "br";
const COUNTRY_ISRAEL: &str = "il";

/// Per-class enable decisions for one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelFlags {
    pub emergency: bool,
    pub etws: bool,
    pub presidential: bool,
    pub cmas_extreme: bool,
    pub cmas_severe: bool,
    pub cmas_amber: bool,
    pub tests_force_disabled: bool,
    pub etws_test: bool,
    pub cmas_test: bool,
    pub channel_50: bool,
    pub country_specific: bool,
}

impl ChannelFlags {
    /// Derive flags. When `target_enabled` is false every enable flag except
    /// `channel_50` is false.
    pub fn derive(prefs: &PreferenceSet, identity: &IdentityContext, target_enabled: bool) -> Self {
        // Emergency off disables everything except presidential.
        let emergency = target_enabled && prefs.emergency_alerts;
        let tests_allowed = !prefs.tests_force_disabled && emergency;
        let channel_50_support =
            identity.show_brazil_settings || identity.sim_country_is(COUNTRY_BRAZIL);

        Self {
            emergency,
            etws: emergency,
            // 3GPP TS 22.268 section 6.2: not user-suppressible.
            presidential: target_enabled,
            cmas_extreme: emergency && prefs.cmas_extreme,
            cmas_severe: emergency && prefs.cmas_severe,
            cmas_amber: emergency && prefs.cmas_amber,
            tests_force_disabled: prefs.tests_force_disabled,
            etws_test: tests_allowed && prefs.etws_test,
            cmas_test: tests_allowed && prefs.cmas_test,
            // Not gated on the target: follows device/SIM support and the preference only.
            channel_50: channel_50_support && prefs.channel_50,
            country_specific: emergency
                && (identity.sim_country_is(COUNTRY_ISRAEL)
                    || identity.network_country_is(COUNTRY_ISRAEL)),
        }
    }

    pub fn enabled(&self, class: AlertClass) -> bool {
        match class {
            AlertClass::Etws => self.etws,
            AlertClass::Presidential => self.presidential,
            AlertClass::CmasExtreme => self.cmas_extreme,
            AlertClass::CmasSevere => self.cmas_severe,
            AlertClass::CmasAmber => self.cmas_amber,
            AlertClass::EtwsTest => self.etws_test,
            AlertClass::CmasTest => self.cmas_test,
            AlertClass::Channel50 => self.channel_50,
            AlertClass::CountrySpecific => self.country_specific,
        }
    }
}

/// Compute the ordered directive list for one subscription.
///
/// Order: carrier ranges (with their presidential enables), the standard
/// channel table, then the presidential override on the target. Carrier
/// ranges apply to GSM phones only.
pub fn evaluate(
    prefs: &PreferenceSet,
    identity: &IdentityContext,
    carrier_range: Option<&str>,
    target_enabled: bool,
) -> Vec<Directive> {
    let flags = ChannelFlags::derive(prefs, identity, target_enabled);
    tracing::debug!(?flags, target_enabled, "derived channel flags");

    let mut out = Vec::with_capacity(CHANNEL_TABLE.len() + 2 * PRESIDENTIAL_CHANNELS.len() + 4);

    let carrier_text = carrier_range.filter(|s| !s.is_empty() && identity.phone_type == PhoneType::Gsm);
    if let Some(text) = carrier_text {
        for range in parse_carrier_ranges(text) {
            out.push(Directive::new(RanType::Gsm, range, flags.emergency, Origin::Carrier));
        }
        // Issued regardless of `flags.emergency`; later table rows decide the final state.
        for (ran, range) in PRESIDENTIAL_CHANNELS {
            out.push(Directive::new(ran, range, true, Origin::CarrierPresidential));
        }
    }

    for entry in CHANNEL_TABLE {
        out.push(Directive::new(
            entry.ran,
            entry.range,
            flags.enabled(entry.class),
            Origin::Table(entry.class),
        ));
    }

    if target_enabled {
        for (ran, range) in PRESIDENTIAL_CHANNELS {
            out.push(Directive::new(ran, range, true, Origin::PresidentialOverride));
        }
    }

    out
}
