pub mod build_info;
pub mod build_info_generator;
pub mod config;
