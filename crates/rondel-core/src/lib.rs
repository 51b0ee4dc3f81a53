//! # rondel-core
//!
//! The geometry and selection engine behind the rondel wheel picker: a
//! vertically scrolling list rendered as a spinning drum. This crate is the
//! pure-math and state layer; it knows nothing about rendering or gesture
//! recognition and talks to the host list through the [`ScrollSurface`]
//! seam.
//!
//! The pieces:
//!
//! - [`index`] — native ↔ logical index conversion and minimal rotation
//!   paths under infinite wraparound.
//! - [`curve`] — per-item cylinder transform (scale, rotation, translation,
//!   opacity, perspective) from the item's offset off the viewport center.
//! - [`hit`] — tap coordinate back to the item it visually lands on, by
//!   inverting the curve.
//! - [`session`] — per-wheel state: derived selection, programmatic
//!   shortest-path animated navigation, save/restore.
//! - [`composite`] — join-all coordination of multi-wheel pickers.
//!
//! ```rust
//! use rondel_core::*;
//!
//! let tf = item_transform(110.0, 440.0, &CurveParams::default());
//! assert!(tf.rotation_x > 0.0); // above center tilts toward the viewer
//! assert_eq!(minimal_shift(10, 8, 1), (3, -7));
//! ```

pub mod anim;
pub mod color;
pub mod composite;
pub mod config;
pub mod curve;
pub mod geometry;
pub mod hit;
pub mod index;
pub mod session;
pub mod signal;
pub mod tests;

pub use anim::*;
pub use color::*;
pub use composite::*;
pub use config::*;
pub use curve::*;
pub use geometry::*;
pub use hit::*;
pub use index::*;
pub use session::*;
pub use signal::*;
