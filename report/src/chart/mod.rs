//! Chart builders.
//!
//! Each builder is a pure function from a table to a [`plotly::Plot`]; none of
//! them mutate their input or share state.
//!
//! | Builder | Input | Chart |
//! |---------|-------|-------|
//! | [`enrollment_overview`] | national totals | bar per enrollment type |
//! | [`age_sunburst`] | melted records | age bracket → enrollment type |
//! | [`region_treemap`] | records | 전국 → province → sub-region |
//! | [`province_bubble`] | province aggregates | regional (log x) vs workplace |

pub mod bubble;
pub mod figure;
mod hierarchy;
pub mod overview;
pub mod palette;
pub mod sunburst;
pub mod treemap;

pub use bubble::province_bubble;
pub use overview::enrollment_overview;
pub use sunburst::age_sunburst;
pub use treemap::region_treemap;
