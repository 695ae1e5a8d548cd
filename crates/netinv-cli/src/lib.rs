//! CLI library components for the inventory cleaner.

pub mod logging;
pub mod pipeline;
