//! Events delivered by the host loop.
//!
//! Submodules:
//! - [`input`] – pointer press and move events and their dispatch to the mouse system
pub mod input;
