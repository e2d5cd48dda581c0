//! UI Components

pub mod intro;
pub mod mint_modal;
pub mod navbar;
pub mod pony_viewer;

pub use intro::Intro;
pub use mint_modal::MintModal;
pub use navbar::Navbar;
pub use pony_viewer::PonyViewer;
