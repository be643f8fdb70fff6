//! Environment bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{SessionConfig, SessionError};
use crate::nn::tri_state;
use crate::session::{GameSession, Observation, Selection, StepOutcome, EXTERNAL};

fn to_py_err(err: SessionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Step result as seen from Python: (observation, reward, terminated, truncated, winner).
type PyStep<'py> = (Bound<'py, PyArray1<f32>>, f64, bool, bool, Option<String>);

/// Python wrapper for GameSession.
///
/// Python plays White; Black is played by a seeded uniform random opponent.
#[pyclass(name = "CheckersEnv")]
pub struct PyCheckersEnv {
    session: GameSession,
}

impl PyCheckersEnv {
    fn observation_array<'py>(py: Python<'py>, observation: Observation) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_vec_bound(py, observation.state.tensor)
    }

    fn step_tuple<'py>(py: Python<'py>, outcome: StepOutcome) -> PyStep<'py> {
        (
            Self::observation_array(py, outcome.observation),
            outcome.reward,
            outcome.terminated,
            outcome.truncated,
            outcome.winner.map(|color| color.to_string()),
        )
    }
}

#[pymethods]
impl PyCheckersEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seed: RNG seed for the opponent
    /// - max_steps: steps before an episode is truncated (None for no limit)
    /// - illegal_move_limit: consecutive rejected selections before White
    ///   forfeits (None to never forfeit)
    #[new]
    #[pyo3(signature = (seed = 42, max_steps = Some(1024), illegal_move_limit = None))]
    fn new(seed: u64, max_steps: Option<u32>, illegal_move_limit: Option<u32>) -> Self {
        let mut config = SessionConfig::default()
            .with_seed(seed)
            .with_max_steps(max_steps);
        if let Some(limit) = illegal_move_limit {
            config = config.with_illegal_move_limit(limit);
        }
        Self {
            session: GameSession::new(config),
        }
    }

    /// Start a new episode and return the flat observation.
    #[pyo3(signature = (seed = None))]
    fn reset<'py>(&mut self, py: Python<'py>, seed: Option<u64>) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let observation = self.session.reset(seed).map_err(to_py_err)?;
        Ok(Self::observation_array(py, observation))
    }

    /// Move White to (row, col).
    ///
    /// Returns (observation, reward, terminated, truncated, winner).
    fn step<'py>(&mut self, py: Python<'py>, row: i64, col: i64) -> PyResult<PyStep<'py>> {
        let selection = Selection::at(row, col).map_err(to_py_err)?;
        let outcome = self.session.step(selection).map_err(to_py_err)?;
        Ok(Self::step_tuple(py, outcome))
    }

    /// Play the legal destination with the highest of 64 scores.
    fn step_scores<'py>(&mut self, py: Python<'py>, scores: Vec<f32>) -> PyResult<PyStep<'py>> {
        let outcome = self
            .session
            .step(Selection::Scores(scores))
            .map_err(to_py_err)?;
        Ok(Self::step_tuple(py, outcome))
    }

    /// 0/1 mask over the 64 squares of White's legal destinations.
    fn legal_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, &self.session.observation().legal_mask())
    }

    /// 8x8 board: 1 White, -1 Black, 0 empty.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let cells = tri_state(self.session.engine(), EXTERNAL);
        PyArray1::from_slice_bound(py, &cells)
            .reshape([8, 8])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Episode counters as a dict.
    fn stats<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let stats = self.session.stats();
        let dict = PyDict::new_bound(py);
        dict.set_item("episodes", stats.episodes)?;
        dict.set_item("steps", stats.steps)?;
        dict.set_item("total_reward", stats.total_reward)?;
        dict.set_item("best_score", stats.best_score)?;
        dict.set_item("white_wins", stats.white_wins)?;
        dict.set_item("black_wins", stats.black_wins)?;
        dict.set_item("rejected_streak", stats.rejected_streak)?;
        Ok(dict)
    }

    /// Whether the current episode is over.
    #[getter]
    fn done(&self) -> bool {
        self.session.is_done()
    }

    /// Flat observation length.
    #[getter]
    fn observation_size(&self) -> usize {
        self.session.observation().state.len()
    }

    fn __repr__(&self) -> String {
        let stats = self.session.stats();
        format!(
            "CheckersEnv(episode={}, steps={}, done={})",
            stats.episodes,
            stats.steps,
            self.session.is_done()
        )
    }
}
