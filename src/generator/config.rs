/// Which binaries the generator queries. Both are resolved through `PATH`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub date_program: String,
    pub vcs_program: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            date_program: String::from("date"),
            vcs_program: String::from("git"),
        }
    }
}
