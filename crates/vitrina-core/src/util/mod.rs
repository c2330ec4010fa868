//! Utility modules.
//!
//! - [`ids`]: Turning product ids into file-safe page names

pub mod ids;
