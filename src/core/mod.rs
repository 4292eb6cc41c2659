//! Core module - fundamental types and utilities

pub mod environment;

pub use environment::Environment;
