//! Entry point for the operator integration tests

mod operators;
