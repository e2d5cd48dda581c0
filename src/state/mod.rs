//! Global reactive state

pub mod wallet;
