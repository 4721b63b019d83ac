#[macro_use]
pub mod macros;

pub mod canvas;
pub mod config;
pub mod dedup;
pub mod output;
