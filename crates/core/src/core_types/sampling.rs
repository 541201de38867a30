//! Linearly spaced domains and immutable sample sets for plotting
//!
//! Solvers evaluate a closed-form function over a [`linspace`] domain and
//! hand the caller a [`Trajectory`]. The trajectory is never mutated after
//! construction; the presentation layer renders it once and drops it.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Evenly spaced values over `[start, end]`, both endpoints included.
///
/// Matches the usual `linspace` convention: `count == 1` yields only `start`,
/// `count == 0` yields nothing.
///
/// # Example
/// ```
/// use mechanics_core::core_types::sampling::linspace;
///
/// let xs: Vec<f64> = linspace(0.0, 1.0, 5).collect();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> impl ExactSizeIterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| {
        // Pin the last point so rounding never overshoots the domain
        if count > 1 && i == count - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Ordered, immutable set of samples produced by one computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<S> {
    samples: Vec<S>,
}

impl<S> Trajectory<S> {
    /// Sample `f` at `count` points spread evenly over `[start, end]`
    pub fn sample<F>(start: f64, end: f64, count: usize, f: F) -> Self
    where
        F: FnMut(f64) -> S,
    {
        Self {
            samples: linspace(start, end, count).map(f).collect(),
        }
    }

    /// Wrap samples that were computed elsewhere
    #[must_use]
    pub fn from_samples(samples: Vec<S>) -> Self {
        Self { samples }
    }

    /// All samples in order
    #[must_use]
    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples were produced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.samples.iter()
    }

    /// First sample, if any
    #[must_use]
    pub fn first(&self) -> Option<&S> {
        self.samples.first()
    }

    /// Last sample, if any
    #[must_use]
    pub fn last(&self) -> Option<&S> {
        self.samples.last()
    }

    /// Extract one column for a chart axis
    pub fn column<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&S) -> f64,
    {
        self.samples.iter().map(f).collect()
    }
}

impl<S> Index<usize> for Trajectory<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.samples[index]
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs: Vec<f64> = linspace(0.0, 4.328, 200).collect();
        assert_eq!(xs.len(), 200);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[199], 4.328);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert_eq!(linspace(1.0, 2.0, 0).count(), 0);
        assert_eq!(linspace(1.0, 2.0, 1).collect::<Vec<_>>(), vec![1.0]);
    }

    #[test]
    fn test_linspace_descending() {
        let xs: Vec<f64> = linspace(1.0, -1.0, 3).collect();
        assert_eq!(xs, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_trajectory_column() {
        let traj = Trajectory::sample(0.0, 2.0, 3, |t| (t, t * t));
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.column(|s| s.1), vec![0.0, 1.0, 4.0]);
        assert_eq!(traj[1], (1.0, 1.0));
    }
}
