//! CLI commands for graphlab

pub mod algorithm;
pub mod dispatch;
pub mod edit;
pub mod info;
