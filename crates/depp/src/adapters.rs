//! Package manager backend adapters

pub mod pip;

pub use pip::Pip;
