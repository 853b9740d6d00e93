#![doc(test(attr(deny(warnings))))]

//! Idikhar Wallet is a terminal rendition of a mobile-wallet savings
//! assistant: wallet home, spend categories, savings plans and the plan
//! creation wizard.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Idikhar wallet tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
        assert!(super::INIT_TRACING.is_completed());
    }
}
