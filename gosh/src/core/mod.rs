//! Deterministic, pure logic shared by the shell and its builtins.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod grep;
pub mod history;
pub mod tilde;
pub mod tokenize;
