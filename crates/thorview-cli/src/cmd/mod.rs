// crates/thorview-cli/src/cmd/mod.rs

pub mod classify;
pub mod game;
pub mod inspect;
pub mod query;
