//! Image gradients feeding the line primitive.
//!
//! - Sobel gradient computation returning `gx`, `gy` and magnitude.
//! - Borders are handled by clamping indices (replicate).

pub mod grad;

/// Per‑pixel gradients with magnitude.
pub use grad::{sobel_gradients, Grad};
