//! lazyseq library — application logic for the `lazyseq` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod presenter;
pub mod schedule;
