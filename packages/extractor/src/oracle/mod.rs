//! Selector oracle implementations.

mod gemini;

pub use gemini::GeminiOracle;
