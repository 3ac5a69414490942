use crate::generator::build_info_generator::BuildInfoGenerator;
use env_logger::Env;
use log::info;
use std::ffi::OsString;
use std::process::ExitCode;

mod cli;
mod environment;
mod error;
mod generator;
mod guard;
mod header;
mod metadata;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().collect();

    match cli::run(&args, BuildInfoGenerator::system) {
        Ok(build_info) => {
            info!("Build info {} / {}", build_info.date, build_info.commit);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
