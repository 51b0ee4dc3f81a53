//! # rondel-list
//!
//! The widget half of rondel, minus any rendering: a headless virtualized
//! wheel column ([`VirtualWheel`]) implementing the engine's
//! `ScrollSurface` seam, snap-on-release, selection-overlay geometry, and
//! [`WheelPicker`] tying a surface and session together for a host render
//! layer.

pub mod overlay;
pub mod picker;
pub mod surface;

pub use overlay::{OverlayBands, OverlayStyle, overlay_bands};
pub use picker::{WheelItemFrame, WheelPicker};
pub use surface::VirtualWheel;
