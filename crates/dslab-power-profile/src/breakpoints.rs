//! Merging of time breakpoints into a variable-step time grid.

/// Result of merging a set of time points.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedPoints {
    /// Durations between consecutive merged instants.
    pub steps: Vec<f64>,
    /// Index of the merged instant of every input point, in the input order.
    pub indices: Vec<usize>,
}

impl MergedPoints {
    /// Returns the number of distinct merged instants.
    pub fn instants(&self) -> usize {
        self.steps.len() + 1
    }
}

/// Sorts `points` and collapses the ones lying within `eps` of each other into distinct instants.
///
/// The sorted points are walked in order while tracking the point which opened the current instant. A point
/// opens a new instant only if it is more than `eps` away from that point, so merging is sequential: several points
/// can join the same instant even if some of them are more than `eps` apart from each other.
///
/// At least two points are expected and `eps` should be non-negative.
pub fn merge(points: &[f64], eps: f64) -> MergedPoints {
    debug_assert!(points.len() >= 2, "at least two points are required, got {}", points.len());
    debug_assert!(eps >= 0., "tolerance should be non-negative, got {}", eps);

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].total_cmp(&points[b]));

    let mut steps = Vec::new();
    let mut indices = vec![0; points.len()];

    if let Some(&first) = order.first() {
        let mut x = points[first];
        let mut j = 0;
        for &i in order.iter().skip(1) {
            let delta = points[i] - x;
            if delta > eps {
                x = points[i];
                steps.push(delta);
                j += 1;
            }
            indices[i] = j;
        }
    }

    MergedPoints { steps, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsorted_input() {
        let merged = merge(&[4., 0., 2., 2.], 1e-9);
        assert_eq!(merged.steps, vec![2., 2.]);
        assert_eq!(merged.indices, vec![2, 0, 1, 1]);
        assert_eq!(merged.instants(), 3);
    }

    #[test]
    fn test_all_equal() {
        let merged = merge(&[1., 1., 1.], 0.);
        assert!(merged.steps.is_empty());
        assert_eq!(merged.indices, vec![0, 0, 0]);
    }

    #[test]
    fn test_gap_equal_to_eps_is_merged() {
        let merged = merge(&[0., 0.5, 1.5], 0.5);
        assert_eq!(merged.steps, vec![1.5]);
        assert_eq!(merged.indices, vec![0, 0, 1]);
    }
}
