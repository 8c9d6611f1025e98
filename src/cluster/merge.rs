/// Greedy agglomerative merging of a cluster list to its fixpoint.
use crate::cluster::Cluster;
use crate::cluster::align::slide;

/// Terminal state of one trial: the final cluster list plus the two scalars
/// the selector ranks trials by.
#[derive(Debug, Clone)]
pub struct Clustering {
    pub clusters: Vec<Cluster>,
    /// Number of final clusters.
    pub cluster_count: usize,
    /// Population standard deviation of the pairwise absolute differences
    /// between cluster member-counts; 0.0 for a single-cluster result.
    pub dispersion: f64,
}

/// Merge `clusters` pairwise until no remaining pair qualifies.
///
/// Each round scans every unordered pair in working order and keeps the pair
/// with the strictly highest positive score (strict `>` makes the first pair
/// found win ties). The winning pair is replaced by its merged cluster,
/// which joins the end of the working order, and the scan repeats. The loop
/// ends when one cluster remains or no pair scores above zero.
///
/// The working set is an arena with a per-entry active flag; deactivating
/// the merged pair and appending the result reproduces the remove/append
/// ordering of a plain list without shifting elements.
pub fn merge_clusters(clusters: Vec<Cluster>, min_overlap: usize) -> Clustering {
    let mut arena = clusters;
    let mut active = vec![true; arena.len()];

    loop {
        let handles: Vec<usize> = (0..arena.len()).filter(|&h| active[h]).collect();
        if handles.len() <= 1 {
            break;
        }

        let mut best_score = 0i32;
        let mut best: Option<(usize, usize, Cluster)> = None;
        for (n, &i) in handles.iter().enumerate() {
            for &j in &handles[n + 1..] {
                let (score, merged) = slide(&arena[i], &arena[j], min_overlap);
                if score > best_score {
                    best_score = score;
                    // A positive score always comes with a merged cluster.
                    best = merged.map(|m| (i, j, m));
                }
            }
        }

        match best {
            Some((i, j, merged)) => {
                active[i] = false;
                active[j] = false;
                arena.push(merged);
                active.push(true);
            }
            None => break,
        }
    }

    let final_clusters: Vec<Cluster> = arena
        .into_iter()
        .zip(active)
        .filter_map(|(c, keep)| keep.then_some(c))
        .collect();

    // A fully merged result is optimal for this trial; there are no pairwise
    // distances to spread.
    if final_clusters.len() == 1 {
        return Clustering {
            clusters: final_clusters,
            cluster_count: 1,
            dispersion: 0.0,
        };
    }

    let cardinalities: Vec<usize> = final_clusters.iter().map(|c| c.members.len()).collect();
    let mut distances = Vec::new();
    for (n, &a) in cardinalities.iter().enumerate() {
        for &b in &cardinalities[n + 1..] {
            distances.push(a.abs_diff(b) as f64);
        }
    }

    Clustering {
        cluster_count: final_clusters.len(),
        dispersion: population_std(&distances),
        clusters: final_clusters,
    }
}

/// Population standard deviation (ddof = 0); 0.0 for an empty slice.
fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
