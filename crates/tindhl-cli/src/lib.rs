//! CLI library components for TinDHL.

pub mod logging;
pub mod pipeline;
