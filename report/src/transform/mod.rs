//! Transformation module.
//!
//! - Melt: wide enrollment rows to one row per enrollment type
//! - Grouper: per-province sums and national totals
//! - Pipeline: load, reshape, chart, render, write

pub mod grouper;
pub mod melt;
pub mod pipeline;

pub use grouper::{aggregate_by_province, enrollment_totals};
pub use melt::melt;
pub use pipeline::*;
