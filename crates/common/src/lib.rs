//! Common types for the MindSphere SDK workspace

mod secret;

pub use secret::Secret;
