use crate::error::ToolError;
use log::debug;
use std::process::Command;

/// Runs an external program and hands back what it printed on stdout.
pub trait EnvironmentQuery {
    /// Returns stdout as printed, untrimmed. Callers trim.
    fn query(&self, program: &str, args: &[&str]) -> Result<String, ToolError>;
}

pub struct SystemEnvironment;

impl EnvironmentQuery for SystemEnvironment {
    fn query(&self, program: &str, args: &[&str]) -> Result<String, ToolError> {
        debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ToolError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ToolError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
