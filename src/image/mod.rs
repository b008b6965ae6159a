//! Image containers used by the primitives and the tracker.
//!
//! - [`Frame`]: owned 3-channel RGB frame as delivered by a frame source.
//! - [`BinaryMask`]: owned single-channel mask with rectangle pixel counting.
//! - [`ImageF32`]: owned float plane for numeric filtering.

pub mod f32;
pub mod frame;
pub mod io;
pub mod mask;

pub use self::f32::ImageF32;
pub use self::frame::Frame;
pub use self::mask::{BinaryMask, Crop};
