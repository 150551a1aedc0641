//! Flat-kernel mean-shift clustering
//!
//! Mode-seeking over the batch's vector space: every point is a seed, each
//! seed walks toward the mean of the points inside its kernel window until
//! it stops moving, and seeds that land on the same position form one
//! cluster. No cluster count is chosen up front and no randomness is
//! involved, so the same input always partitions the same way.

use tracing::debug;

/// Mean-shift parameters. The kernel radius is estimated from the data on
/// every run; only the estimation quantile and the iteration cap are fixed.
#[derive(Debug, Clone)]
pub struct MeanShift {
    /// Quantile of the nearest-neighbor distance distribution used for
    /// bandwidth estimation
    pub quantile: f64,
    /// Cap on mode-seeking iterations per seed
    pub max_iter: usize,
}

/// Converged positions closer than this are the same mode
const MODE_MERGE_EPSILON: f64 = 1e-7;

impl Default for MeanShift {
    fn default() -> Self {
        Self {
            quantile: 0.3,
            max_iter: 300,
        }
    }
}

impl MeanShift {
    /// Partition points into clusters; returns one cluster id per point.
    ///
    /// Ids are dense, starting at 0, ordered by descending mode density.
    /// A degenerate bandwidth (all points identical, or too few distinct
    /// positions to estimate a radius) collapses everything into cluster 0
    /// rather than dividing by zero.
    pub fn fit(&self, points: &[Vec<f64>]) -> Vec<usize> {
        if points.is_empty() {
            return Vec::new();
        }

        let bandwidth = self.estimate_bandwidth(points);
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            debug!("degenerate bandwidth {}, using a single cluster", bandwidth);
            return vec![0; points.len()];
        }

        let tolerance = 1e-3 * bandwidth;
        let modes: Vec<Vec<f64>> = points
            .iter()
            .map(|seed| self.seek_mode(seed, points, bandwidth, tolerance))
            .collect();

        let centers = merge_modes(&modes, points, bandwidth);

        // Every point joins the cluster of its nearest surviving mode
        points
            .iter()
            .map(|point| {
                let mut best = 0;
                let mut best_dist = f64::INFINITY;
                for (idx, center) in centers.iter().enumerate() {
                    let d = euclidean(point, center);
                    if d < best_dist {
                        best_dist = d;
                        best = idx;
                    }
                }
                best
            })
            .collect()
    }

    /// Kernel radius estimated from the data: the mean, over all points, of
    /// the distance to the k-th nearest neighbor (the point itself counts),
    /// where k is the quantile share of the batch size.
    ///
    /// Returns 0.0 when every point sits on top of its neighbors — the
    /// caller must treat that as "one cluster", not as a radius.
    pub fn estimate_bandwidth(&self, points: &[Vec<f64>]) -> f64 {
        let n = points.len();
        if n == 0 {
            return 0.0;
        }
        let k = ((n as f64 * self.quantile) as usize).max(2).min(n);

        let mut total = 0.0;
        for point in points {
            let mut dists: Vec<f64> = points.iter().map(|other| euclidean(point, other)).collect();
            dists.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            total += dists[k - 1];
        }
        total / n as f64
    }

    /// Shift one seed uphill until the move falls below tolerance or the
    /// iteration cap is reached
    fn seek_mode(
        &self,
        seed: &[f64],
        points: &[Vec<f64>],
        bandwidth: f64,
        tolerance: f64,
    ) -> Vec<f64> {
        let mut position = seed.to_vec();
        for _ in 0..self.max_iter {
            let mut mean = vec![0.0; position.len()];
            let mut count = 0usize;
            for point in points {
                if euclidean(point, &position) < bandwidth {
                    for (m, x) in mean.iter_mut().zip(point) {
                        *m += x;
                    }
                    count += 1;
                }
            }
            if count == 0 {
                // Flat kernel with data-point seeding always sees the seed
                // itself on the first pass; an empty window can only follow
                // a move, so the previous position is the mode.
                break;
            }
            for m in mean.iter_mut() {
                *m /= count as f64;
            }
            let shift = euclidean(&mean, &position);
            position = mean;
            if shift < tolerance {
                break;
            }
        }
        position
    }
}

/// Collapse converged seeds into distinct modes: positions within epsilon
/// are one mode, and a mode strictly inside a denser mode's window is
/// suppressed (ties broken by seed order). Surviving centers are returned
/// densest first.
fn merge_modes(modes: &[Vec<f64>], points: &[Vec<f64>], bandwidth: f64) -> Vec<Vec<f64>> {
    let mut unique: Vec<Vec<f64>> = Vec::new();
    for mode in modes {
        if !unique.iter().any(|u| euclidean(u, mode) < MODE_MERGE_EPSILON) {
            unique.push(mode.clone());
        }
    }

    // Window population of each candidate mode
    let mut density: Vec<(usize, usize)> = unique
        .iter()
        .enumerate()
        .map(|(idx, mode)| {
            let count = points
                .iter()
                .filter(|p| euclidean(p.as_slice(), mode) < bandwidth)
                .count();
            (idx, count)
        })
        .collect();
    density.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut centers: Vec<Vec<f64>> = Vec::new();
    for (idx, _) in density {
        let candidate = &unique[idx];
        if centers.iter().all(|kept| euclidean(kept, candidate) >= bandwidth) {
            centers.push(candidate.clone());
        }
    }
    debug!("mean-shift kept {} of {} candidate modes", centers.len(), unique.len());
    centers
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(dim: usize, axis: usize) -> Vec<f64> {
        let mut v = vec![0.0; dim];
        v[axis] = 1.0;
        v
    }

    #[test]
    fn test_empty_input() {
        assert!(MeanShift::default().fit(&[]).is_empty());
    }

    #[test]
    fn test_identical_points_form_one_cluster() {
        let points = vec![unit(2, 0), unit(2, 0), unit(2, 0)];
        let labels = MeanShift::default().fit(&points);
        assert_eq!(labels, vec![0, 0, 0]);
    }

    #[test]
    fn test_orthogonal_pair_stays_apart() {
        let points = vec![unit(2, 0), unit(2, 1)];
        let labels = MeanShift::default().fit(&points);
        assert_ne!(labels[0], labels[1]);
    }

    #[test]
    fn test_duplicate_and_outlier() {
        // Two coincident points and one far away: the tight pair's window
        // never reaches the outlier.
        let points = vec![unit(2, 0), unit(2, 0), unit(2, 1)];
        let labels = MeanShift::default().fit(&points);
        assert_eq!(labels[0], labels[1]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_bridge_point_joins_groups() {
        // A point between two others pulls all three toward one mode
        let points = vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.707, 0.707],
            vec![-1.0, -1.0],
        ];
        let labels = MeanShift::default().fit(&points);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[0], labels[2]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_partition_is_total() {
        let points = vec![unit(4, 0), unit(4, 1), unit(4, 2), unit(4, 3)];
        let labels = MeanShift::default().fit(&points);
        assert_eq!(labels.len(), points.len());
        let clusters = labels.iter().max().unwrap() + 1;
        for label in &labels {
            assert!(*label < clusters);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let points = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ];
        let ms = MeanShift::default();
        assert_eq!(ms.fit(&points), ms.fit(&points));
    }

    #[test]
    fn test_bandwidth_positive_for_spread_points() {
        let points = vec![unit(3, 0), unit(3, 1), unit(3, 2)];
        let bw = MeanShift::default().estimate_bandwidth(&points);
        assert!(bw > 0.0);
    }

    #[test]
    fn test_bandwidth_zero_for_identical_points() {
        let points = vec![unit(2, 0), unit(2, 0)];
        let bw = MeanShift::default().estimate_bandwidth(&points);
        assert_eq!(bw, 0.0);
    }
}
