//! wallet-domain
//!
//! Pure domain models (SavingsPlan, PlanDraft, spend categories, languages).
//! No I/O, no CLI, no rendering. Only data types and core enums.

pub mod common;
pub mod dashboard;
pub mod draft;
pub mod plan;

pub use common::*;
pub use dashboard::*;
pub use draft::*;
pub use plan::*;
