#![doc(test(attr(deny(warnings))))]

//! Property onboarding offers the form-state model behind a multi-screen
//! property listing wizard: field registries, structured editors that reduce
//! to one-line summaries, required-field gates and one-shot navigation
//! handoffs between screens.

pub mod config;
pub mod editor;
pub mod errors;
pub mod fields;
pub mod flow;
pub mod gate;
pub mod media;
pub mod navigation;
pub mod pricing;
pub mod render;
pub mod screens;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let info = build_info();
        tracing::info!(
            hash = info.git_hash,
            profile = info.profile,
            "Property onboarding tracing initialized."
        );
    });
}

/// Compile-time build metadata embedded by `build.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("PROPERTY_ONBOARDING_BUILD_HASH"),
        git_status: env!("PROPERTY_ONBOARDING_BUILD_STATUS"),
        timestamp: env!("PROPERTY_ONBOARDING_BUILD_TIMESTAMP"),
        target: env!("PROPERTY_ONBOARDING_BUILD_TARGET"),
        profile: env!("PROPERTY_ONBOARDING_BUILD_PROFILE"),
        rustc: env!("PROPERTY_ONBOARDING_BUILD_RUSTC"),
    }
}
