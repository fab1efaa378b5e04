//! Data models used throughout the application
//!
//! This module contains the HTTP response bodies of the gateway and the
//! parsing of path parameters into chain types.

// Path parameter parsing
pub mod params;
// Response bodies
pub mod responses;
