//! Browser helpers and page constants

pub mod constants;
pub mod dom;
