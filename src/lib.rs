//! polyprep - canonicalize delimited polygon dumps into solver-ready .poly files

pub mod compare;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod ingest;
pub mod poly;
