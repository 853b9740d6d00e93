//! wallet-core
//!
//! Savings-plan workflow and aggregation logic for the Idikhar wallet.
//! Depends on wallet-domain. No CLI, no terminal I/O, no persistence.

pub mod catalog;
pub mod error;
pub mod format;
pub mod installment_service;
pub mod locale;
pub mod navigation;
pub mod plan_factory;
pub mod plan_store;
pub mod progress_service;
pub mod time;
pub mod wizard;

pub use error::CoreError;
pub use format::*;
pub use installment_service::*;
pub use locale::*;
pub use navigation::*;
pub use plan_factory::*;
pub use plan_store::*;
pub use progress_service::*;
pub use time::*;
pub use wizard::*;
