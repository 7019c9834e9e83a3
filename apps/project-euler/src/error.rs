use std::io;
use std::path::PathBuf;

use math::TriangleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EulerError {
    #[error("no such puzzle: {0}")]
    UnknownProblem(u32),

    #[error("failed to read input {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Triangle(#[from] TriangleError),
}
