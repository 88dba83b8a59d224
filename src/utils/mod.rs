//! Utility modules for the transcoder
//!
//! This module contains helpers that sit at the edges of the
//! pipeline.

pub mod encoding;

// Re-export commonly used functions
pub use encoding::*;
