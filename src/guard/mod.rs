pub mod guard_source;
pub mod guard_token;
