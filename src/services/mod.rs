//! Browser-side services

pub mod ethereum;
