//! CLI library components for the territory report.

pub mod logging;
pub mod pipeline;
pub mod render;
