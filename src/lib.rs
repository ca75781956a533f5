//! Directional labeling of price and signal series.
//!
//! # Modules
//!
//! - `config` - Labeling parameters, loadable from TOML
//! - `pipeline` - Labeler followed by the trend-strength filter
//!
//! The transforms themselves live in the `labeling` crate and are
//! re-exported here.

pub mod config;
pub mod pipeline;

pub use config::LabelConfig;
pub use pipeline::label_series;

pub use labeling::{
    Direction, LabelError, RunningOls, Segment, filter, filter_direction, label,
    label_direction, segments,
};
