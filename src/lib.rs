// Library exports for testing and reuse

pub mod cli;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod policy;
pub mod tiling;

// Re-export commonly used types
pub use error::{Result, ThresholdError};
pub use filter::NO_DATA_VALUE;
pub use pipeline::{run, RasterDescriptor};
pub use policy::{FilterRegistry, FilterSpec};
pub use tiling::{BlockDescriptor, BlockGrid};
