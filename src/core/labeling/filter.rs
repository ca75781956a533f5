//! Trend-strength filter for directional labels.
//!
//! Each nonzero run is fitted with a least-squares line from both ends.
//! Only the prefix and suffix whose fitted move reaches `excursion` keep
//! their label; everything else in the run becomes flat.

use tracing::trace;

use crate::direction::{Direction, Segment, from_host, segments, to_host};
use crate::error::{Result, check_excursion, check_lengths};
use crate::ols::RunningOls;

/// Strongest fitted move found while scanning a run from one end.
#[derive(Debug, Clone, Copy)]
struct Reach {
    index: usize,
    distance: f64,
}

/// Signed trend strength of `values[run.start..=i]`, maximized over `i`.
///
/// Starts at the scan origin with a distance of zero; the first point has no
/// slope and is never a candidate.
fn forward_reach(values: &[f64], run: &Segment, sign: f64) -> Reach {
    let mut ols = RunningOls::new();
    let mut best = Reach {
        index: run.start,
        distance: 0.0,
    };

    for i in run.start..=run.end {
        let x = (i - run.start) as f64;
        ols.push(x, values[i]);
        let Some(beta) = ols.slope() else {
            continue;
        };
        let distance = sign * beta * x;
        if distance > best.distance {
            best = Reach { index: i, distance };
        }
    }

    best
}

/// Mirror of [`forward_reach`], fitting from `run.end` towards `run.start`.
fn backward_reach(values: &[f64], run: &Segment, sign: f64) -> Reach {
    let mut ols = RunningOls::new();
    let mut best = Reach {
        index: run.end,
        distance: 0.0,
    };

    for i in (run.start..=run.end).rev() {
        let x = (run.end - i) as f64;
        ols.push(x, values[i]);
        let Some(beta) = ols.slope() else {
            continue;
        };
        let distance = -sign * beta * x;
        if distance > best.distance {
            best = Reach { index: i, distance };
        }
    }

    best
}

/// Trim each directional run to the sub-runs whose fitted trend reaches
/// `excursion`.
///
/// # Arguments
///
/// * `values` - The series the labels were computed on.
/// * `dir` - Existing labels, same length as `values`.
/// * `excursion` - Minimum fitted move a kept sub-run must show.
///
/// # Returns
///
/// Refined labels. Flat positions stay flat; nonzero positions either keep
/// their label or become flat.
pub fn filter(values: &[f64], dir: &[Direction], excursion: f64) -> Result<Vec<Direction>> {
    check_lengths(values.len(), dir.len())?;
    check_excursion(excursion)?;

    let mut out = vec![Direction::Flat; values.len()];

    for run in segments(dir).iter().filter(|s| !s.direction.is_flat()) {
        let sign = run.direction.as_f64();
        let fwd = forward_reach(values, run, sign);
        let back = backward_reach(values, run, sign);

        // output starts flat, so only the kept ends need writing
        if fwd.distance >= excursion {
            out[run.start..=fwd.index].fill(run.direction);
        }
        if back.distance >= excursion {
            out[back.index..=run.end].fill(run.direction);
        }

        trace!(
            "run [{}, {}] {:?}: forward {:.4} to {}, backward {:.4} from {}",
            run.start,
            run.end,
            run.direction,
            fwd.distance,
            fwd.index,
            back.distance,
            back.index
        );
    }

    Ok(out)
}

/// [`filter`] in the host representation.
///
/// `dir` must only contain `-1.0`, `0.0` or `1.0`.
pub fn filter_direction(values: &[f64], dir: &[f64], excursion: f64) -> Result<Vec<f64>> {
    // a length mismatch is reported ahead of any bad label value
    check_lengths(values.len(), dir.len())?;
    let dir = from_host(dir)?;
    Ok(to_host(&filter(values, &dir, excursion)?))
}
