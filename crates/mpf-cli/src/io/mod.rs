// crates/mpf-cli/src/io/mod.rs

pub mod mpf;
