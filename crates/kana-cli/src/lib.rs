//! Command implementations and the terminal front end for `kanatype`.

pub mod commands;
pub mod screen;
pub mod trace_init;
