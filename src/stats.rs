/// Trial-search statistics tracking and reporting
use log::info;

use crate::cluster::Clustering;

/// Summary of a completed randomized search, reported before the final
/// clustering is printed.
#[derive(Default, Debug)]
pub struct SearchStats {
    /// Number of trials run.
    pub trials: usize,
    /// Smallest cluster count reached by any trial.
    pub min_cluster_count: usize,
    /// Largest cluster count reached by any trial.
    pub max_cluster_count: usize,
    /// Trials that reached the smallest cluster count.
    pub optimal_trials: usize,
    /// Highest dispersion among the optimal trials (the selected value).
    pub selected_dispersion: f64,
}

impl SearchStats {
    /// Summarize a complete list of trial results.
    pub fn from_results(results: &[Clustering]) -> Self {
        let Some(min_cluster_count) = results.iter().map(|r| r.cluster_count).min() else {
            return Self::default();
        };
        let max_cluster_count = results.iter().map(|r| r.cluster_count).max().unwrap_or(0);

        let optimal: Vec<&Clustering> = results
            .iter()
            .filter(|r| r.cluster_count == min_cluster_count)
            .collect();
        let selected_dispersion = optimal
            .iter()
            .map(|r| r.dispersion)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            trials: results.len(),
            min_cluster_count,
            max_cluster_count,
            optimal_trials: optimal.len(),
            selected_dispersion,
        }
    }

    /// Print summary statistics to log
    pub fn print_summary(&self) {
        if self.trials == 0 {
            info!("No trials run");
            return;
        }

        info!("=== Search Summary ===");
        info!("Number of trials: {}", self.trials);
        info!(
            "Cluster counts reached: {}..{}",
            self.min_cluster_count, self.max_cluster_count
        );
        info!(
            "Trials at the minimal count: {} ({:.2}%)",
            self.optimal_trials,
            100.0 * self.optimal_trials as f64 / self.trials as f64
        );
        info!(
            "Dispersion of the selected clustering: {:.4}",
            self.selected_dispersion
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Cluster;

    fn clustering(cluster_count: usize, dispersion: f64) -> Clustering {
        Clustering {
            clusters: vec![Cluster::singleton(b"A".to_vec())],
            cluster_count,
            dispersion,
        }
    }

    #[test]
    fn stats_of_empty_results() {
        let stats = SearchStats::from_results(&[]);
        assert_eq!(stats.trials, 0);
        assert_eq!(stats.min_cluster_count, 0);
        assert_eq!(stats.optimal_trials, 0);
    }

    #[test]
    fn stats_of_mixed_results() {
        let results = vec![
            clustering(3, 1.0),
            clustering(2, 0.5),
            clustering(2, 2.5),
            clustering(4, 9.0),
        ];
        let stats = SearchStats::from_results(&results);
        assert_eq!(stats.trials, 4);
        assert_eq!(stats.min_cluster_count, 2);
        assert_eq!(stats.max_cluster_count, 4);
        assert_eq!(stats.optimal_trials, 2);
        assert!((stats.selected_dispersion - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_of_uniform_results() {
        let results = vec![clustering(1, 0.0), clustering(1, 0.0)];
        let stats = SearchStats::from_results(&results);
        assert_eq!(stats.min_cluster_count, 1);
        assert_eq!(stats.max_cluster_count, 1);
        assert_eq!(stats.optimal_trials, 2);
        assert!(stats.selected_dispersion.abs() < f64::EPSILON);
    }
}
