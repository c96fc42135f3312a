//! Dimension placement: which dimension to build and where to attach it.

pub mod types;
pub mod classify;
pub mod offset;
pub mod resolver;

pub use types::*;
pub use classify::{classify_by_anchors, classify_by_line, classify_linear, ClassifyRule};
pub use offset::{select_offset, OffsetAnchors, Side};
pub use resolver::DimensionResolver;

#[cfg(test)]
mod tests_classify;
