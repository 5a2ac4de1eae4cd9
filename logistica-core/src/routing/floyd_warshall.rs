use std::time::Instant;

use log::debug;
use petgraph::visit::EdgeRef;
use rayon::prelude::*;

use super::table::DistanceTable;
use crate::{Condition, PARALLEL_RELAXATION_THRESHOLD, RouteNetwork, TravelTime};

/// Floyd-Warshall all-pairs shortest paths over the network under `condition`.
///
/// O(V³) time, O(V²) space. Weights are validated positive on insertion, so
/// negative cycles cannot occur.
pub fn all_pairs_shortest_paths(network: &RouteNetwork, condition: Condition) -> DistanceTable {
    let started = Instant::now();
    let n = network.city_count();
    let cities: Vec<String> = network.graph.node_weights().cloned().collect();

    let mut distances = vec![TravelTime::INFINITY; n * n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n * n];

    for edge in network.graph.edge_references() {
        let (from, to) = (edge.source().index(), edge.target().index());
        // Self-loops never beat the zero diagonal
        if from == to {
            continue;
        }
        distances[from * n + to] = edge.weight().get(condition);
        predecessors[from * n + to] = Some(from);
    }
    for i in 0..n {
        distances[i * n + i] = 0.0;
    }

    if n > 0 {
        let parallel = n >= PARALLEL_RELAXATION_THRESHOLD;
        for k in 0..n {
            // Row k is fixed during round k since distances[k][k] == 0
            let via_row = distances[k * n..(k + 1) * n].to_vec();
            let via_predecessors = predecessors[k * n..(k + 1) * n].to_vec();

            let relax = |(row, row_predecessors): (&mut [TravelTime], &mut [Option<usize>])| {
                relax_row(row, row_predecessors, k, &via_row, &via_predecessors);
            };

            if parallel {
                distances
                    .par_chunks_mut(n)
                    .zip(predecessors.par_chunks_mut(n))
                    .for_each(relax);
            } else {
                distances
                    .chunks_mut(n)
                    .zip(predecessors.chunks_mut(n))
                    .for_each(relax);
            }
        }
    }

    debug!(
        "Computed shortest paths for {n} cities under {condition} in {:?}",
        started.elapsed()
    );

    DistanceTable::new(condition, cities, distances, predecessors)
}

/// Relaxes one row `i` through intermediate city `k`
#[inline]
fn relax_row(
    row: &mut [TravelTime],
    row_predecessors: &mut [Option<usize>],
    k: usize,
    via_row: &[TravelTime],
    via_predecessors: &[Option<usize>],
) {
    let to_via = row[k];
    if to_via.is_infinite() {
        return;
    }

    for (j, &via_distance) in via_row.iter().enumerate() {
        let candidate = to_via + via_distance;
        if candidate < row[j] {
            row[j] = candidate;
            row_predecessors[j] = via_predecessors[j];
        }
    }
}
