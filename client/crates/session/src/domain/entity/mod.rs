//! Entity Module

pub mod session_state;
