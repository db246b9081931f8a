//! Integration tests for the yuvproc crates.
//!
//! End-to-end runs over real files: probe, open, loop, compare bytes.
