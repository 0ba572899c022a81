use tracing::debug;

use crate::{interpreter::value::complex::ComplexNumber, util::num::usize_to_f64_checked};

/// A closed interval of `x` values to plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    /// Left edge.
    pub min_x: f64,
    /// Right edge.
    pub max_x: f64,
}

impl PlotRange {
    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns `n` evenly spaced points from `min_x` to `max_x` inclusive.
    ///
    /// # Example
    /// ```
    /// use function_solver::plot::PlotRange;
    ///
    /// let range = PlotRange { min_x: -1.0,
    ///                         max_x: 1.0, };
    /// assert_eq!(range.samples(5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    /// assert_eq!(range.samples(1), vec![0.0]);
    /// assert!(range.samples(0).is_empty());
    /// ```
    #[must_use]
    pub fn samples(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.min_x + self.width() / 2.0],
            _ => {
                let steps = usize_to_f64_checked(n - 1).unwrap_or(f64::MAX);
                (0..n).map(|i| {
                          let t = usize_to_f64_checked(i).unwrap_or(0.0) / steps;
                          self.width().mul_add(t, self.min_x)
                      })
                      .collect()
            },
        }
    }
}

/// Constants that turn a solution set into a plotting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotWindow {
    /// Half the width of the window when there are no real solutions.
    pub half_width:    f64,
    /// Padding on each side as a fraction of the span of real solutions.
    pub padding_ratio: f64,
    /// Lower bound on the padding, so a single solution still gets a window.
    pub min_padding:   f64,
}

impl Default for PlotWindow {
    fn default() -> Self {
        Self { half_width:    5.0,
               padding_ratio: 0.2,
               min_padding:   1.0, }
    }
}

impl PlotWindow {
    /// Computes the window around the real members of `solutions`.
    ///
    /// With no real solution the window is `center ± half_width`. Otherwise it
    /// spans the real solutions plus `max(span * padding_ratio, min_padding)`
    /// on each side.
    #[must_use]
    pub fn range(&self, center: f64, solutions: &[ComplexNumber]) -> PlotRange {
        let (low, high) = solutions.iter()
                                   .filter(|s| s.is_real())
                                   .map(|s| s.real)
                                   .fold((f64::INFINITY, f64::NEG_INFINITY),
                                         |(low, high), x| (low.min(x), high.max(x)));

        if low > high {
            return PlotRange { min_x: center - self.half_width,
                               max_x: center + self.half_width, };
        }

        let padding = ((high - low) * self.padding_ratio).max(self.min_padding);
        debug!(low, high, padding, "derived plot range");
        PlotRange { min_x: low - padding,
                    max_x: high + padding, }
    }
}

/// Returns the mean of the real solutions, or `0.0` if there are none.
///
/// A solution counts as real only if its imaginary part is exactly zero.
///
/// # Example
/// ```
/// use function_solver::{interpreter::value::complex::ComplexNumber, plot::find_solution_center};
///
/// let solutions = [ComplexNumber::from(-2.0), ComplexNumber::from(4.0), ComplexNumber::new(0.0, 1.0)];
/// assert_eq!(find_solution_center(&solutions), 1.0);
/// assert_eq!(find_solution_center(&[]), 0.0);
/// ```
#[must_use]
pub fn find_solution_center(solutions: &[ComplexNumber]) -> f64 {
    let reals: Vec<f64> = solutions.iter()
                                   .filter(|s| s.is_real())
                                   .map(|s| s.real)
                                   .collect();
    match usize_to_f64_checked(reals.len()) {
        Some(count) if count > 0.0 => reals.iter().sum::<f64>() / count,
        _ => 0.0,
    }
}

/// Computes the plotting window with the default [`PlotWindow`].
///
/// # Example
/// ```
/// use function_solver::{interpreter::value::complex::ComplexNumber, plot::get_plot_range};
///
/// let range = get_plot_range(2.5, &[ComplexNumber::from(0.0), ComplexNumber::from(5.0)]);
/// assert_eq!((range.min_x, range.max_x), (-1.0, 6.0));
/// ```
#[must_use]
pub fn get_plot_range(center: f64, solutions: &[ComplexNumber]) -> PlotRange {
    PlotWindow::default().range(center, solutions)
}
