//! Property-based tests for parsing and filtering.
