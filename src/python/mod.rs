//! Python bindings for the ecard match engine.
//!
//! The presentation layer (a web or desktop UI written in Python) drives a
//! match through these classes and renders what they return.
//!
//! # Quick Start
//!
//! ```python
//! import ecard
//!
//! match = ecard.Match(winning_score=1, max_rounds=5, seed=42)
//! match.select_side("emperor")
//!
//! outcome = match.play_round("citizen")
//! print(outcome.message)
//!
//! if outcome.match_over:
//!     print(match.summary().winning_side)
//! ```

use pyo3::prelude::*;

mod py_match;

pub use py_match::*;

/// ecard: Emperor/Citizen/Slave card game engine.
#[pymodule]
fn ecard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatch>()?;
    m.add_class::<PyRoundOutcome>()?;
    m.add_class::<PyMatchSummary>()?;

    Ok(())
}
