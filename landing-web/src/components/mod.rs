//! UI Components

pub mod benchmark_graph;
pub mod demo;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod section;
pub mod theme_toggle;

pub use benchmark_graph::BenchmarkGraph;
pub use demo::InteractiveDemo;
pub use footer::Footer;
pub use navbar::Navbar;
pub use section::Section;
pub use theme_toggle::ThemeToggle;
