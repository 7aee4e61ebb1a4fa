pub mod metrics;
pub mod scaling;

pub use metrics::{Bounds, distance, min_separation};
pub use scaling::{DEFAULT_SCALE, Rescaler};
