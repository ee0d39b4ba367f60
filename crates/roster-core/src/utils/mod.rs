//! Utility modules shared by the core and its adapters.

pub mod validation;
