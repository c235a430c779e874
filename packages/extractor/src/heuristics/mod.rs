//! Heuristic field inference.
//!
//! Ordered fallback chains used when selector application leaves a field
//! empty. Each chain is an explicit list of candidate strategies evaluated
//! in sequence, short-circuiting on the first hit. A miss is a normal,
//! silent outcome, never an error.

mod availability;
mod price;
mod specs;
mod title;

pub use availability::infer_availability;
pub use price::infer_price;
pub use specs::infer_specs;
pub use title::infer_title;
