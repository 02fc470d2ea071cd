//! Value Object Module

pub mod identity;
pub mod navigation;
pub mod route;
