//! Card selection for the computer-controlled side.
//!
//! Policies are trait-based so the match controller can run with the
//! default weighted policy or a substitute in tests and benchmarks:
//! - `WeightedPolicy`: favors Citizens, holding the power card back
//! - `UniformPolicy`: every remaining card equally likely

pub mod policy;

pub use policy::{AiPolicy, UniformPolicy, WeightedPolicy};
