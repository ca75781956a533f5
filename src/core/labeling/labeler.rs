//! Forward-scan direction labeler.
//!
//! Walks the series once, tracking the running maximum and minimum of the
//! current segment. A segment is closed either when price retraces by at
//! least `excursion` from the latest extremum, or when no new extremum has
//! been made for `inactive` samples.

use tracing::debug;

use crate::direction::{Direction, to_host};
use crate::error::{LabelError, Result, check_excursion, check_inactive};

/// Index and value of a running extremum.
#[derive(Debug, Clone, Copy)]
struct Extremum {
    index: usize,
    value: f64,
}

/// Transient scan state; lives only for one call to [`label`].
#[derive(Debug, Clone, Copy)]
struct ScanState {
    start: usize,
    max: Extremum,
    min: Extremum,
}

impl ScanState {
    fn new(index: usize, value: f64) -> Self {
        let at = Extremum { index, value };
        ScanState {
            start: index,
            max: at,
            min: at,
        }
    }

    fn swing(&self) -> f64 {
        self.max.value - self.min.value
    }

    /// Minimum was made after the maximum.
    fn falling(&self) -> bool {
        self.min.index > self.max.index
    }

    /// Maximum was made after the minimum.
    fn rising(&self) -> bool {
        self.max.index > self.min.index
    }

    // Non-strict comparisons so that ties move the extremum to the later index.
    fn track(&mut self, index: usize, value: f64) {
        if value >= self.max.value {
            self.max = Extremum { index, value };
        }
        if value <= self.min.value {
            self.min = Extremum { index, value };
        }
    }
}

/// Assign `label` to the inclusive range `[from, to]`; empty when `to < from`.
fn apply_label(labels: &mut [Direction], from: usize, to: usize, label: Direction) {
    if from <= to {
        labels[from..=to].fill(label);
    }
}

/// Flat over `[start, max)` followed by a down leg over `[max, min]`.
fn emit_down(labels: &mut [Direction], state: &ScanState) {
    labels[state.start..state.max.index].fill(Direction::Flat);
    apply_label(labels, state.max.index, state.min.index, Direction::Down);
}

/// Flat over `[start, min)` followed by an up leg over `[min, max]`.
fn emit_up(labels: &mut [Direction], state: &ScanState) {
    labels[state.start..state.min.index].fill(Direction::Flat);
    apply_label(labels, state.min.index, state.max.index, Direction::Up);
}

/// Label each sample of `values` as up, down or flat.
///
/// # Arguments
///
/// * `values` - Ordered series (prices, signal levels, ...).
/// * `excursion` - Minimum move that validates a directional segment.
/// * `inactive` - Samples without a new extremum after which the current
///   segment is closed.
///
/// # Returns
///
/// One label per input sample. An empty input yields an empty output.
pub fn label(values: &[f64], excursion: f64, inactive: usize) -> Result<Vec<Direction>> {
    check_excursion(excursion)?;
    check_inactive(inactive)?;

    let mut labels = vec![Direction::Flat; values.len()];
    let Some(&first) = values.first() else {
        return Ok(labels);
    };

    let mut state = ScanState::new(0, first);

    for (cursor, &v) in values.iter().enumerate() {
        if state.swing() >= excursion && state.falling() && v - state.min.value >= excursion {
            // down leg confirmed by a rebound off the minimum
            debug!(
                "retracement up at {}: down leg [{}, {}]",
                cursor, state.max.index, state.min.index
            );
            emit_down(&mut labels, &state);
            state.start = state.min.index;
            state.max = Extremum { index: cursor, value: v };
        } else if state.swing() >= excursion && state.rising() && state.max.value - v >= excursion {
            debug!(
                "retracement down at {}: up leg [{}, {}]",
                cursor, state.min.index, state.max.index
            );
            emit_up(&mut labels, &state);
            state.start = state.max.index;
            state.min = Extremum { index: cursor, value: v };
        } else if state.rising()
            && cursor - state.max.index >= inactive
            && v - state.max.value < excursion
        {
            if state.swing() >= excursion {
                emit_up(&mut labels, &state);
                apply_label(&mut labels, state.max.index + 1, cursor, Direction::Flat);
            } else {
                apply_label(&mut labels, state.start, cursor, Direction::Flat);
            }
            debug!(
                "inactive after up stance at {}: segment [{}, {}] closed",
                cursor, state.start, cursor
            );
            state = ScanState::new(cursor, v);
        } else if state.falling()
            && cursor - state.min.index >= inactive
            && state.min.value - v < excursion
        {
            if state.swing() >= excursion {
                emit_down(&mut labels, &state);
                apply_label(&mut labels, state.min.index + 1, cursor, Direction::Flat);
            } else {
                apply_label(&mut labels, state.start, cursor, Direction::Flat);
            }
            debug!(
                "inactive after down stance at {}: segment [{}, {}] closed",
                cursor, state.start, cursor
            );
            state = ScanState::new(cursor, v);
        }

        state.track(cursor, v);
    }

    let last = values.len() - 1;
    if state.swing() >= excursion && state.falling() {
        emit_down(&mut labels, &state);
        apply_label(&mut labels, state.min.index + 1, last, Direction::Flat);
    } else if state.swing() >= excursion && state.rising() {
        emit_up(&mut labels, &state);
        apply_label(&mut labels, state.max.index + 1, last, Direction::Flat);
    } else {
        apply_label(&mut labels, state.start, last, Direction::Flat);
    }
    debug!("finalized {} samples, last segment from {}", values.len(), state.start);

    Ok(labels)
}

/// [`label`] in the host representation: labels as `-1.0`, `0.0`, `1.0`.
///
/// Takes a signed `inactive` so non-positive windows from the host are
/// reported as invalid arguments instead of wrapping.
pub fn label_direction(values: &[f64], excursion: f64, inactive: i64) -> Result<Vec<f64>> {
    let inactive = usize::try_from(inactive).map_err(|_| {
        LabelError::invalid("inactive", format!("must be at least 1 sample, got {}", inactive))
    })?;
    Ok(to_host(&label(values, excursion, inactive)?))
}
