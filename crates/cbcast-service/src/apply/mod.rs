//! Directive application across subscriptions.

pub mod applier;

pub use applier::{
    apply_directives, configure_all, configure_sub, resolve_target, ApplyReport, Role, SubReport,
    Target,
};
