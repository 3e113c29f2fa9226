//! Standardized broadcast message identifiers.
//!
//! GSM/UMTS/LTE message ids follow 3GPP TS 23.041 section 9.4.1.2.2; CDMA
//! service categories follow 3GPP2 C.R1001. These are protocol constants and
//! must not be altered by policy logic.

use serde::Serialize;

use super::directive::RanType;
use super::range::{ChannelRange, MessageId};

/// System property holding carrier-defined GSM emergency ranges.
pub const CARRIER_EMERGENCY_IDS_PROPERTY: &str = "ro.cb.gsm.emergencyids";

/// GSM-family message identifiers.
pub mod gsm {
    use super::MessageId;

    pub const ETWS_EARTHQUAKE_WARNING: MessageId = 0x1100;
    pub const ETWS_TSUNAMI_WARNING: MessageId = 0x1101;
    pub const ETWS_EARTHQUAKE_AND_TSUNAMI_WARNING: MessageId = 0x1102;
    pub const ETWS_TEST_MESSAGE: MessageId = 0x1103;

    pub const CMAS_PRESIDENTIAL_LEVEL: MessageId = 0x1112;
    pub const CMAS_EXTREME_IMMEDIATE_OBSERVED: MessageId = 0x1113;
    pub const CMAS_EXTREME_IMMEDIATE_LIKELY: MessageId = 0x1114;
    pub const CMAS_EXTREME_EXPECTED_OBSERVED: MessageId = 0x1115;
    pub const CMAS_SEVERE_EXPECTED_LIKELY: MessageId = 0x111A;
    pub const CMAS_CHILD_ABDUCTION_EMERGENCY: MessageId = 0x111B;
    pub const CMAS_REQUIRED_MONTHLY_TEST: MessageId = 0x111C;
    pub const CMAS_OPERATOR_DEFINED_USE: MessageId = 0x111E;

    /// Presidential alert in the additional language (Taiwan PWS 4383).
    pub const CMAS_PRESIDENTIAL_LEVEL_LANGUAGE: MessageId = 0x111F;
    pub const CMAS_REQUIRED_MONTHLY_TEST_LANGUAGE: MessageId = 0x1129;
    pub const CMAS_OPERATOR_DEFINED_USE_LANGUAGE: MessageId = 0x112B;

    /// Brazil area-info channel.
    pub const CHANNEL_50: MessageId = 50;

    /// Country-specific CMAS ids (currently Israel).
    pub const COUNTRY_SPECIFIC_START: MessageId = 919;
    pub const COUNTRY_SPECIFIC_END: MessageId = 928;
}

/// CDMA-family service categories.
pub mod cdma {
    use super::MessageId;

    pub const CMAS_PRESIDENTIAL_LEVEL_ALERT: MessageId = 0x1000;
    pub const CMAS_EXTREME_THREAT: MessageId = 0x1001;
    pub const CMAS_SEVERE_THREAT: MessageId = 0x1002;
    pub const CMAS_CHILD_ABDUCTION_EMERGENCY: MessageId = 0x1003;
    pub const CMAS_TEST_MESSAGE: MessageId = 0x1004;
}

/// Logical alert category a standard channel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertClass {
    Etws,
    Presidential,
    CmasExtreme,
    CmasSevere,
    CmasAmber,
    EtwsTest,
    CmasTest,
    Channel50,
    CountrySpecific,
}

impl AlertClass {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertClass::Etws => "etws",
            AlertClass::Presidential => "presidential",
            AlertClass::CmasExtreme => "cmas_extreme",
            AlertClass::CmasSevere => "cmas_severe",
            AlertClass::CmasAmber => "cmas_amber",
            AlertClass::EtwsTest => "etws_test",
            AlertClass::CmasTest => "cmas_test",
            AlertClass::Channel50 => "channel_50",
            AlertClass::CountrySpecific => "country_specific",
        }
    }
}

/// One row of the standard channel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelEntry {
    pub class: AlertClass,
    pub ran: RanType,
    pub range: ChannelRange,
}

const fn entry(class: AlertClass, ran: RanType, start: MessageId, end: MessageId) -> ChannelEntry {
    ChannelEntry {
        class,
        ran,
        range: ChannelRange::fixed(start, end),
    }
}

/// Standard channels, in the order directives are issued.
pub const CHANNEL_TABLE: [ChannelEntry; 16] = [
    entry(
        AlertClass::Etws,
        RanType::Gsm,
        gsm::ETWS_EARTHQUAKE_WARNING,
        gsm::ETWS_EARTHQUAKE_AND_TSUNAMI_WARNING,
    ),
    entry(
        AlertClass::Presidential,
        RanType::Gsm,
        gsm::CMAS_PRESIDENTIAL_LEVEL,
        gsm::CMAS_PRESIDENTIAL_LEVEL,
    ),
    entry(
        AlertClass::Presidential,
        RanType::Gsm,
        gsm::CMAS_PRESIDENTIAL_LEVEL_LANGUAGE,
        gsm::CMAS_PRESIDENTIAL_LEVEL_LANGUAGE,
    ),
    entry(
        AlertClass::Presidential,
        RanType::Cdma,
        cdma::CMAS_PRESIDENTIAL_LEVEL_ALERT,
        cdma::CMAS_PRESIDENTIAL_LEVEL_ALERT,
    ),
    entry(
        AlertClass::CmasExtreme,
        RanType::Gsm,
        gsm::CMAS_EXTREME_IMMEDIATE_OBSERVED,
        gsm::CMAS_EXTREME_IMMEDIATE_LIKELY,
    ),
    entry(
        AlertClass::CmasExtreme,
        RanType::Cdma,
        cdma::CMAS_EXTREME_THREAT,
        cdma::CMAS_EXTREME_THREAT,
    ),
    entry(
        AlertClass::CmasSevere,
        RanType::Gsm,
        gsm::CMAS_EXTREME_EXPECTED_OBSERVED,
        gsm::CMAS_SEVERE_EXPECTED_LIKELY,
    ),
    entry(
        AlertClass::CmasSevere,
        RanType::Cdma,
        cdma::CMAS_SEVERE_THREAT,
        cdma::CMAS_SEVERE_THREAT,
    ),
    entry(
        AlertClass::CmasAmber,
        RanType::Gsm,
        gsm::CMAS_CHILD_ABDUCTION_EMERGENCY,
        gsm::CMAS_CHILD_ABDUCTION_EMERGENCY,
    ),
    entry(
        AlertClass::CmasAmber,
        RanType::Cdma,
        cdma::CMAS_CHILD_ABDUCTION_EMERGENCY,
        cdma::CMAS_CHILD_ABDUCTION_EMERGENCY,
    ),
    entry(
        AlertClass::EtwsTest,
        RanType::Gsm,
        gsm::ETWS_TEST_MESSAGE,
        gsm::ETWS_TEST_MESSAGE,
    ),
    entry(
        AlertClass::CmasTest,
        RanType::Gsm,
        gsm::CMAS_REQUIRED_MONTHLY_TEST,
        gsm::CMAS_OPERATOR_DEFINED_USE,
    ),
    entry(
        AlertClass::CmasTest,
        RanType::Gsm,
        gsm::CMAS_REQUIRED_MONTHLY_TEST_LANGUAGE,
        gsm::CMAS_OPERATOR_DEFINED_USE_LANGUAGE,
    ),
    entry(
        AlertClass::CmasTest,
        RanType::Cdma,
        cdma::CMAS_TEST_MESSAGE,
        cdma::CMAS_TEST_MESSAGE,
    ),
    entry(
        AlertClass::Channel50,
        RanType::Gsm,
        gsm::CHANNEL_50,
        gsm::CHANNEL_50,
    ),
    entry(
        AlertClass::CountrySpecific,
        RanType::Gsm,
        gsm::COUNTRY_SPECIFIC_START,
        gsm::COUNTRY_SPECIFIC_END,
    ),
];

/// Presidential-level channels (3GPP TS 22.268 section 6.2). Never suppressed
/// on the target subscription.
pub const PRESIDENTIAL_CHANNELS: [(RanType, ChannelRange); 3] = [
    (RanType::Gsm, ChannelRange::single(gsm::CMAS_PRESIDENTIAL_LEVEL)),
    (RanType::Gsm, ChannelRange::single(gsm::CMAS_PRESIDENTIAL_LEVEL_LANGUAGE)),
    (RanType::Cdma, ChannelRange::single(cdma::CMAS_PRESIDENTIAL_LEVEL_ALERT)),
];
