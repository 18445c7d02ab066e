//! Scanning primitives for expression text.
//!
//! The compiler drives a [`cursor::Cursor`] directly; this module provides the
//! span model and numeric literal scanning it relies on.

pub mod number;
pub mod span;

pub(crate) mod cursor;

pub use number::NumberFormat;
pub use span::{ByteOffset, Span};
