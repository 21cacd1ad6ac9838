//! Application-wide state shared between views

pub mod directory;

pub use directory::DirectoryStore;
