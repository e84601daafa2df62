//! Shared utilities for the Backoffice workspace.
//!
//! Currently this is build/version metadata, consumed by the dashboard
//! footer and by the gateway's health-check headers.

#![warn(clippy::all, rust_2018_idioms)]

pub mod version_info;
