#[cfg(test)]
pub mod canned;
pub mod environment_query;
