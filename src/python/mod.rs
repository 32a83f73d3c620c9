//! Python bindings for the tic-tac-toe engine.
//!
//! # Quick Start
//!
//! ```python
//! import ttt_engine as ttt
//!
//! engine = ttt.GameEngine(seed=7, computer="O", first="X", difficulty=2)
//! engine.apply_move(4)          # the computer replies immediately
//! print(engine.board_array())   # uint8 ordinals: 0 empty, 1 X, 2 O
//! print(engine.scores)          # (victories, defeats, ties)
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// ttt_engine: tic-tac-toe with a tiered computer opponent.
#[pymodule]
fn ttt_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameEngine>()?;
    Ok(())
}
