use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt {
    /// Running prefix sum of the values
    ///
    /// ```rust
    /// # use tritium_utils::SliceExt;
    /// assert_eq!([1.0_f64, 2.0, 3.0].cumulative_sum(), vec![1.0_f64, 3.0, 6.0]);
    /// assert!(Vec::<f64>::new().cumulative_sum().is_empty());
    /// ```
    fn cumulative_sum(&self) -> Vec<f64>;

    /// Total area under the curve using the trapezoidal rule
    ///
    /// The `points` are the sample locations for each value and need not be
    /// uniformly spaced. Fewer than two values integrate to zero.
    ///
    /// ```rust
    /// # use tritium_utils::SliceExt;
    /// let y = [0.0_f64, 2.0, 2.0];
    /// let x = [0.0_f64, 1.0, 3.0];
    /// assert_eq!(y.trapezoid(&x), Ok(5.0));
    /// ```
    fn trapezoid(&self, points: &[f64]) -> Result<f64>;

    /// Cumulative area under the curve using the trapezoidal rule
    ///
    /// The result has the same length as the values, starting from an initial
    /// value of zero at the first sample point.
    ///
    /// ```rust
    /// # use tritium_utils::SliceExt;
    /// let y = [0.0_f64, 2.0, 2.0];
    /// let x = [0.0_f64, 1.0, 3.0];
    /// assert_eq!(y.cumulative_trapezoid(&x), Ok(vec![0.0_f64, 1.0, 5.0]));
    /// ```
    fn cumulative_trapezoid(&self, points: &[f64]) -> Result<Vec<f64>>;

    /// True if every value is greater than or equal to the one before it
    ///
    /// ```rust
    /// # use tritium_utils::SliceExt;
    /// assert!([0.0_f64, 1.0, 1.0, 4.0].is_non_decreasing());
    /// assert!(![0.0_f64, 1.0, 0.5].is_non_decreasing());
    /// ```
    fn is_non_decreasing(&self) -> bool;

    /// True if every value is less than or equal to the one before it
    ///
    /// ```rust
    /// # use tritium_utils::SliceExt;
    /// assert!([4.0_f64, 1.0, 1.0, 0.0].is_non_increasing());
    /// assert!(![1.0_f64, 0.5, 0.7].is_non_increasing());
    /// ```
    fn is_non_increasing(&self) -> bool;
}

impl SliceExt for [f64] {
    fn cumulative_sum(&self) -> Vec<f64> {
        self.iter()
            .scan(0.0, |total, v| {
                *total += v;
                Some(*total)
            })
            .collect()
    }

    fn trapezoid(&self, points: &[f64]) -> Result<f64> {
        Ok(self
            .cumulative_trapezoid(points)?
            .last()
            .copied()
            .unwrap_or(0.0))
    }

    fn cumulative_trapezoid(&self, points: &[f64]) -> Result<Vec<f64>> {
        if self.len() != points.len() {
            return Err(Error::LengthMismatch {
                values: self.len(),
                points: points.len(),
            });
        }

        if self.is_empty() {
            return Ok(Vec::new());
        }

        let mut integral = Vec::with_capacity(self.len());
        integral.push(0.0);

        let mut total = 0.0;
        for (y, x) in self.windows(2).zip(points.windows(2)) {
            // area of a single trapezoid between neighbouring samples
            total += 0.5 * (y[0] + y[1]) * (x[1] - x[0]);
            integral.push(total);
        }

        Ok(integral)
    }

    fn is_non_decreasing(&self) -> bool {
        self.windows(2).all(|w| w[0] <= w[1])
    }

    fn is_non_increasing(&self) -> bool {
        self.windows(2).all(|w| w[0] >= w[1])
    }
}
