use crate::error::GeneratorError;
use crate::generator::build_info::BuildInfo;
use crate::generator::build_info_generator::BuildInfoGenerator;
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_PROGRAM: &str = "build-info-gen";

/// Expects exactly `<program> <output-path>`.
pub fn parse_args(args: &[OsString]) -> Result<PathBuf, GeneratorError> {
    match args {
        [_, output] => Ok(PathBuf::from(output)),
        _ => Err(GeneratorError::Usage {
            program: args
                .first()
                .map(|program| program.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
        }),
    }
}

/// The generator is only built once the arguments check out.
pub fn run<F>(args: &[OsString], make_generator: F) -> Result<BuildInfo, GeneratorError>
where
    F: FnOnce() -> BuildInfoGenerator,
{
    let output = parse_args(args)?;

    make_generator().generate(&output)
}
