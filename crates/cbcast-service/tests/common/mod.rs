//! Shared helpers for service integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use cbcast_core::channel::{AlertClass, Directive, Origin, RanType};
use cbcast_service::config;
use cbcast_service::host::ProfileHost;

pub fn host(yaml: &str) -> ProfileHost {
    let profile = config::load_from_str(yaml).expect("profile must parse");
    ProfileHost::from_profile(&profile)
}

/// Enable flag of every table row for `class` (presidential override excluded).
pub fn table_flags(directives: &[Directive], class: AlertClass) -> Vec<bool> {
    directives
        .iter()
        .filter(|d| d.origin == Origin::Table(class))
        .map(|d| d.enable)
        .collect()
}

pub fn find(directives: &[Directive], ran: RanType, start: u32, end: u32, origin: Origin) -> Option<Directive> {
    directives
        .iter()
        .copied()
        .find(|d| d.ran == ran && d.start() == start && d.end() == end && d.origin == origin)
}
