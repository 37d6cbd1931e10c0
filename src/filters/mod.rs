//! Filter modules for image processing effects.
//!
//! ## Architecture
//!
//! All four filters follow the same principles:
//! - **In place** - each takes `&mut Image` and rewrites it in one pass
//! - **Stateless** - no state survives a call; calls on different images
//!   are independent
//! - **Infallible** - every neighbor lookup is bounds-checked and every
//!   arithmetic result lands back in 0-255 before being stored, so there is
//!   no error path for a well-formed grid
//!
//! ## Filter Categories
//!
//! - **Per-pixel**: [`grayscale`] (channel averaging)
//! - **Per-row**: [`reflect`] (horizontal mirror)
//! - **Neighborhood**: [`blur`] (3x3 box mean), [`edges`] (directional
//!   gradient magnitude)
//!
//! The neighborhood filters double-buffer: they read only original pixel
//! values while computing into a temporary grid, then commit it wholesale.
//! Neighbors outside the grid are skipped, not zero-padded and not clamped
//! to the border, so edge pixels aggregate fewer contributions.

pub mod blur;
pub mod edges;
pub mod grayscale;
pub mod reflect;

pub use blur::blur;
pub use edges::edges;
pub use grayscale::grayscale;
pub use reflect::reflect;
