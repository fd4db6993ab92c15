//! Card dominance rules.
//!
//! `RuleTable` is the only place that knows which card beats which.
//! Everything else asks it for an `Outcome` from the attacker's point of
//! view.

pub mod table;

pub use table::{Outcome, RuleTable};
