use crate::error::{LabelError, Result};

/// Directional class assigned to a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Direction {
    /// Sustained downward segment.
    Down = -1,
    /// Flat or indeterminate.
    #[default]
    Flat = 0,
    /// Sustained upward segment.
    Up = 1,
}

impl Direction {
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    pub fn as_f64(self) -> f64 {
        self as i8 as f64
    }

    pub fn is_flat(self) -> bool {
        self == Direction::Flat
    }

    /// Decode a host label. Only exactly -1.0, 0.0 and 1.0 are accepted.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Direction::Flat)
        } else if value == 1.0 {
            Some(Direction::Up)
        } else if value == -1.0 {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = LabelError;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            -1 => Ok(Direction::Down),
            0 => Ok(Direction::Flat),
            1 => Ok(Direction::Up),
            other => Err(LabelError::invalid(
                "direction",
                format!("expected -1, 0 or 1, got {}", other),
            )),
        }
    }
}

impl From<Direction> for f64 {
    fn from(d: Direction) -> f64 {
        d.as_f64()
    }
}

/// Maximal run of one label value, `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub direction: Direction,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Split a label sequence into its maximal same-label runs.
///
/// The returned segments cover `[0, labels.len())` in order, with no gaps
/// and no overlaps; adjacent segments always carry different labels.
pub fn segments(labels: &[Direction]) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < labels.len() {
        let direction = labels[pos];
        let start = pos;
        while pos < labels.len() && labels[pos] == direction {
            pos += 1;
        }
        out.push(Segment {
            start,
            end: pos - 1,
            direction,
        });
    }

    out
}

/// Encode labels in the host representation.
pub fn to_host(labels: &[Direction]) -> Vec<f64> {
    labels.iter().map(|d| d.as_f64()).collect()
}

/// Decode host labels, rejecting anything outside {-1, 0, 1}.
pub fn from_host(labels: &[f64]) -> Result<Vec<Direction>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Direction::from_f64(v).ok_or_else(|| {
                LabelError::invalid("dir", format!("label {} at index {} is not -1, 0 or 1", v, i))
            })
        })
        .collect()
}
