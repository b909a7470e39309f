// crates/thorview-cli/src/io/mod.rs

pub mod archive;
pub mod moves;
