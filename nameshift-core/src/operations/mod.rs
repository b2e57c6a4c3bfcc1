mod permute;
mod transform;

pub use permute::{permute_operation, PermuteSummary};
pub use transform::{transform_operation, TransformOptions, TransformSummary};
