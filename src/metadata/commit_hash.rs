use crate::environment::environment_query::EnvironmentQuery;
use crate::error::GeneratorError;
use log::debug;

pub const COMMIT_PREFIX_LEN: usize = 8;

/// Resolves `HEAD` through `<vcs_program> rev-parse HEAD`.
///
/// Unlike the build date there is no fallback here: a failing VCS query
/// aborts the run.
pub fn resolve_commit_hash(
    environment: &dyn EnvironmentQuery,
    vcs_program: &str,
) -> Result<String, GeneratorError> {
    let stdout = environment
        .query(vcs_program, &["rev-parse", "HEAD"])
        .map_err(GeneratorError::Commit)?;

    let commit = shorten(stdout.trim());
    debug!("Commit from {}: {}", vcs_program, commit);

    Ok(commit)
}

fn shorten(revision: &str) -> String {
    revision.chars().take(COMMIT_PREFIX_LEN).collect()
}
