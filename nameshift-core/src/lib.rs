#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod codec;
pub mod config;
pub mod error;
pub mod executor;
pub mod expr;
pub mod operations;
pub mod pathname;
pub mod permute;
pub mod plan;
pub mod report;
pub mod transform;

pub use codec::CodecPair;
pub use config::Config;
pub use error::{Error, Result};
pub use executor::Executor;
pub use expr::{CompiledTransform, ModuleRegistry};
pub use operations::{
    permute_operation, transform_operation, PermuteSummary, TransformOptions, TransformSummary,
};
pub use pathname::{join_name, split_name};
pub use permute::plan_permutation;
pub use plan::{PermutationMode, RenameStep, Verb};
pub use report::Reporter;
pub use transform::{NameTransform, Outcome, TransformPipeline};
