pub mod error;
pub mod solutions;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, instrument};

pub use error::EulerError;

/// Available problem IDs, in the order they run when none are requested.
pub const PROBLEMS: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 18];

/// Settings shared by every solver run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root of the puzzle inputs; problem N reads from `<data_dir>/N/`.
    pub data_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            data_dir: default_data_dir(),
        }
    }
}

/// The `data` directory shipped next to this crate's manifest.
pub fn default_data_dir() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "data"].iter().collect()
}

pub fn is_available(id: u32) -> bool {
    PROBLEMS.contains(&id)
}

/// Read the whole of `<data_dir>/<problem>/<filename>`.
pub fn read_input(config: &RunConfig, problem: u32, filename: &str) -> Result<String, EulerError> {
    let path = config.data_dir.join(problem.to_string()).join(filename);
    debug!(path = %path.display(), "reading input");
    fs::read_to_string(&path).map_err(|source| EulerError::Input { path, source })
}

/// Run a specific problem and return the answer
#[instrument(skip(config))]
pub fn run_problem(id: u32, config: &RunConfig) -> Result<String, EulerError> {
    let start = Instant::now();
    let answer = match id {
        1 => solutions::pe1::solve().to_string(),
        2 => solutions::pe2::solve().to_string(),
        3 => solutions::pe3::solve().to_string(),
        4 => solutions::pe4::solve().to_string(),
        5 => solutions::pe5::solve().to_string(),
        6 => solutions::pe6::solve().to_string(),
        7 => solutions::pe7::solve().to_string(),
        18 => solutions::pe18::solve(config)?.to_string(),
        _ => return Err(EulerError::UnknownProblem(id)),
    };
    debug!(%answer, elapsed = ?start.elapsed(), "solved");
    Ok(answer)
}

/// Problems to run for a request: every entry of `PROBLEMS` when `requested`
/// is empty, otherwise `requested` in the given order. Any unknown id rejects
/// the whole request before anything runs.
pub fn select_problems(requested: &[u32]) -> Result<Vec<u32>, EulerError> {
    if requested.is_empty() {
        return Ok(PROBLEMS.to_vec());
    }
    match requested.iter().find(|&&id| !is_available(id)) {
        Some(&id) => Err(EulerError::UnknownProblem(id)),
        None => Ok(requested.to_vec()),
    }
}

/// Solve `ids`, returning `(id, answer)` pairs in the order of `ids`.
///
/// With `parallel` the problems run on the rayon pool. Either way the first
/// failure is returned and no answers are.
pub fn run_problems(
    ids: &[u32],
    config: &RunConfig,
    parallel: bool,
) -> Result<Vec<(u32, String)>, EulerError> {
    let solve = |&id: &u32| run_problem(id, config).map(|answer| (id, answer));
    if parallel {
        ids.par_iter().map(solve).collect()
    } else {
        ids.iter().map(solve).collect()
    }
}

/// One output line: `<id>: <value>`.
pub fn format_answer(id: u32, answer: &str) -> String {
    format!("{}: {}", id, answer)
}
