use anyhow::Result;
use labeling::{Direction, filter, label};
use tracing::debug;

use crate::config::LabelConfig;

/// Label `values` and, when enabled, trim the labels with the trend filter.
pub fn label_series(values: &[f64], config: &LabelConfig) -> Result<Vec<Direction>> {
    config.validate()?;

    let labels = label(values, config.excursion, config.inactive)?;
    if !config.filter {
        return Ok(labels);
    }

    let filtered = filter(values, &labels, config.effective_filter_excursion())?;
    debug!(
        "filter cleared {} of {} directional labels",
        labels.iter().zip(&filtered).filter(|(a, b)| a != b).count(),
        labels.iter().filter(|d| !d.is_flat()).count()
    );

    Ok(filtered)
}
