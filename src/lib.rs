//! QR Stats - Matrix validation and statistics service.
//!
//! This crate validates matrices, forwards them to an external QR
//! factorization service, and computes descriptive statistics over the
//! returned Q and R factors.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
