//! Presentation Layer
//!
//! Route table and the path-level entry point to the guard.

pub mod navigator;
pub mod router;

pub use navigator::Navigator;
pub use router::RouteTable;
