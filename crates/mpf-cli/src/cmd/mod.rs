// crates/mpf-cli/src/cmd/mod.rs

pub mod filter;
