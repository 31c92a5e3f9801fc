//! Server-side glue, compiled only with the `ssr` feature

pub mod config;
pub mod generate;
