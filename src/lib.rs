//! Source generators for the p6 library.
//!
//! - [`atlas`] embeds the font atlas PNG as a byte array header.
//! - [`color`] turns a color-name dataset into `p6::NamedColor` constants.

pub mod atlas;
pub mod color;
mod error;
pub mod output;

pub use crate::error::Error;
