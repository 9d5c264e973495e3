//! # Core Library
//!
//! Responsive layout decisions, configuration, errors, and static file
//! mapping for the Harper landing page.

pub mod config;
pub mod error;
pub mod layout;
pub mod static_files;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use layout::{
    Classification, DemoGate, DemoLifecycle, GateTransition, LandingLayout, SectionSpec, Viewport,
};
