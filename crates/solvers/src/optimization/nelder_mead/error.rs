use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a Nelder–Mead search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot search a zero-dimensional space")]
    ZeroDimension,

    #[error("objective returned NaN at {x:?}")]
    NanCost { x: Vec<f64> },

    #[error("objective failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(super) fn objective<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Objective(Box::new(err))
    }
}
