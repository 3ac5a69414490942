use crate::environment::environment_query::EnvironmentQuery;
use chrono::{DateTime, Local};
use log::{debug, warn};

/// Asks `<date_program> -R` for the build timestamp, falling back to the
/// in-process clock. Never fails.
pub fn resolve_build_date(environment: &dyn EnvironmentQuery, date_program: &str) -> String {
    match environment.query(date_program, &["-R"]) {
        Ok(stdout) => {
            let date = stdout.trim();
            if !date.is_empty() {
                debug!("Build date from {}: {}", date_program, date);
                return date.to_string();
            }
            warn!("{} printed nothing, using local clock", date_program);
        }
        Err(err) => warn!("{}, using local clock", err),
    }

    fallback_date(Local::now())
}

/// RFC 2822 rendering matching `date -R`, e.g. `Thu, 15 Oct 2026 09:30:00 +0200`.
pub fn fallback_date(now: DateTime<Local>) -> String {
    now.to_rfc2822()
}
