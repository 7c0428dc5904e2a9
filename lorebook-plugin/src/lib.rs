//! Lorebook Plugin System
//!
//! Provides the converter contract the host merge pipeline calls into:
//! - `ConverterPlugin`: one registered field transform
//! - `ConverterRegistry`: field name to converter table
//! - `ConvertContext`: explicit per-call configuration

mod context;
mod registry;
mod traits;

pub use context::ConvertContext;
pub use registry::ConverterRegistry;
pub use traits::{ConverterMeta, ConverterPlugin};

/// Re-export core types for converter authors
pub mod prelude {
    pub use crate::{ConvertContext, ConverterMeta, ConverterPlugin, ConverterRegistry};
    pub use lorebook_core::prelude::*;
}
