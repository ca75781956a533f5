//! Directional labeling of ordered numeric series.
//!
//! - `labeler` - forward scan assigning up / down / flat per sample
//! - `filter` - trims labeled runs to their statistically strong parts
//! - `direction` - label type and run decomposition
//! - `ols` - incremental least-squares slope

mod direction;
mod error;
mod filter;
mod labeler;
mod ols;

pub use direction::{Direction, Segment, from_host, segments, to_host};
pub use error::{LabelError, Result};
pub use filter::{filter, filter_direction};
pub use labeler::{label, label_direction};
pub use ols::RunningOls;
