use crate::environment::environment_query::{EnvironmentQuery, SystemEnvironment};
use crate::error::GeneratorError;
use crate::generator::build_info::BuildInfo;
use crate::generator::config::GeneratorConfig;
use crate::guard::guard_source::{GuardSource, RandomGuardSource};
use crate::guard::guard_token::GuardToken;
use crate::header::writer::write_output;
use crate::metadata::build_date::resolve_build_date;
use crate::metadata::commit_hash::resolve_commit_hash;
use log::debug;
use std::path::Path;

pub struct BuildInfoGenerator {
    config: GeneratorConfig,
    environment: Box<dyn EnvironmentQuery>,
    guard_source: Box<dyn GuardSource>,
}

impl BuildInfoGenerator {
    pub fn new(
        config: GeneratorConfig,
        environment: Box<dyn EnvironmentQuery>,
        guard_source: Box<dyn GuardSource>,
    ) -> BuildInfoGenerator {
        BuildInfoGenerator {
            config,
            environment,
            guard_source,
        }
    }

    pub fn system() -> BuildInfoGenerator {
        BuildInfoGenerator::new(
            GeneratorConfig::default(),
            Box::new(SystemEnvironment),
            Box::new(RandomGuardSource),
        )
    }

    pub fn collect(&self) -> Result<BuildInfo, GeneratorError> {
        let guard = GuardToken::from_id(self.guard_source.next_id());
        debug!("Include guard: {}", guard);

        let date = resolve_build_date(self.environment.as_ref(), &self.config.date_program);
        let commit = resolve_commit_hash(self.environment.as_ref(), &self.config.vcs_program)?;

        Ok(BuildInfo {
            guard,
            date,
            commit,
        })
    }

    /// Collects the metadata and writes the header. The output file is only
    /// touched once every value has been resolved.
    pub fn generate(&self, path: &Path) -> Result<BuildInfo, GeneratorError> {
        let build_info = self.collect()?;

        write_output(path, &build_info.render())?;

        Ok(build_info)
    }
}
