/// Ordinary least squares of `y` against `x`, accumulated one point at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningOls {
    sum_x: f64,
    sum_y: f64,
    sum_xy: f64,
    sum_xx: f64,
    n: usize,
}

impl RunningOls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xy += x * y;
        self.sum_xx += x * x;
        self.n += 1;
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Fitted slope, or `None` while the fit is undetermined.
    ///
    /// A single point (or any set of identical `x`) leaves the
    /// denominator at zero; that case is reported as `None` rather
    /// than dividing.
    pub fn slope(&self) -> Option<f64> {
        if self.n < 2 {
            return None;
        }
        let n = self.n as f64;
        let denom = self.sum_xx - self.sum_x * self.sum_x / n;
        if !(denom > 0.0) {
            return None;
        }
        Some((self.sum_xy - self.sum_x * self.sum_y / n) / denom)
    }
}
