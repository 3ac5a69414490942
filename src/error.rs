use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of an external tool invocation.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` exited with {}: {stderr}", describe_status(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => String::from("no status (terminated by signal)"),
    }
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("usage: {program} <output-path>")]
    Usage { program: String },

    #[error("failed to resolve commit hash: {0}")]
    Commit(#[source] ToolError),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GeneratorError {
    pub fn exit_code(&self) -> u8 {
        match self {
            GeneratorError::Usage { .. } => 2,
            GeneratorError::Commit(_) => 1,
            GeneratorError::Io { .. } => 1,
        }
    }
}
