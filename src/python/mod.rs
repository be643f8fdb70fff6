//! Python bindings for the rust-draughts environment.
//!
//! # Quick Start
//!
//! ```python
//! import rust_draughts
//!
//! env = rust_draughts.CheckersEnv(seed=42)
//! obs = env.reset()
//!
//! mask = env.legal_mask()
//! square = int(mask.argmax())
//! obs, reward, terminated, truncated, winner = env.step(square // 8, square % 8)
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// rust-draughts: English draughts as a reset/step environment.
#[pymodule]
fn rust_draughts(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCheckersEnv>()?;
    Ok(())
}
