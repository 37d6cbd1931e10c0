//! rasterfx
//!
//! In-memory raster filters over 8-bit RGB grids, plus the small I/O
//! collaborators around them.
//!
//! ## Image Format
//! Images are row-major grids of RGB pixels, stored as `(height, width, 3)`
//! arrays of `u8`. There is no alpha channel and no other bit depth.
//!
//! ## Filter Architecture
//! Each filter is a single stateless pass that rewrites the image in place:
//! - **grayscale** and **reflect** are per-pixel / per-row transforms
//! - **blur** and **edges** read a 3x3 neighborhood, so they compute into a
//!   same-shape temporary grid first and replace the source only once every
//!   output pixel is done
//!
//! Out-of-range neighbors are omitted entirely (no zero padding, no index
//! clamping); the reduced neighbor counts at borders are part of the contract.
//!
//! The [`bmp`] module decodes and encodes the uncompressed 24-bit bitmap
//! container the `filter` binary consumes. The [`carve`] module is an
//! unrelated byte-stream utility that recovers JPEGs from raw dumps; it
//! shares no data structures with the filter engine.

pub mod bmp;
pub mod carve;
pub mod filters;
pub mod image;

pub use crate::image::{Image, Pixel};
