//! # Integration tests
//!
//! Scenarios exercising vectors and matrices together through the public API only.
//! All code written in this module could be written by an external user of the crate.
