//! Unit test modules.

mod panels;
mod query;
