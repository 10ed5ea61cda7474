//! Per-shape renderers. Each one handles exactly one `DrawCmd` variant.

pub(crate) mod circle;
pub(crate) mod common;
pub(crate) mod line;
