//! Anko Editor Core
//!
//! This crate provides the platform-independent editor core:
//! - Viewport dimensions
//! - Cursor state and navigation
//! - Input command classification
//! - Append-buffer frame composition
//!
//! This crate has NO tty dependencies and can be used headlessly for testing.

pub mod command;
pub mod cursor;
pub mod escape;
pub mod frame;
pub mod geometry;
pub mod render;

pub use command::Command;
pub use cursor::Cursor;
pub use frame::Frame;
pub use geometry::Dimensions;
