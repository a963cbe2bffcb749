#![doc(test(attr(deny(warnings))))]

//! Budge Core provides the filter/derive engine behind the Budge transaction,
//! goal and admin lists, plus a scripted chat assistant with delayed replies.

pub mod assistant;
pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod summary;
pub mod theme;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budge Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
