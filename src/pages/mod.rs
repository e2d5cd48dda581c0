//! Page modules - single home page

pub mod home;

pub use home::HomePage;
