//! Integration test modules.

mod commands;
