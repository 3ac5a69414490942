pub mod build_date;
pub mod commit_hash;
