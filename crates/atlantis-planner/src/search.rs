use crate::ORIGIN_PENALTY;
use atlantis_core::{Layer, Topology, Workload};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

pub(crate) struct ForwardResult {
    pub candidate: usize,
    pub path: Vec<usize>,
    pub proc_cost: u64,
}

/// Searches every worker for the cheapest place to dissolve one layer.
///
/// Cost of a candidate is the path cost to reach it (one per hop, plus
/// [`ORIGIN_PENALTY`] for each hop that lands on the gatekeeper) plus that
/// worker's processing cost for this layer plus its current aggregate
/// workload — with a second, independent [`ORIGIN_PENALTY`] charge if the
/// candidate itself is the gatekeeper. Both origin charges are intentional;
/// see SPEC_FULL.md's design notes on the origin-penalty double charge.
///
/// Ties are broken by earliest enqueue: the heap key carries a monotonic
/// sequence number, and candidate selection keeps the first strictly-lower
/// cost it sees, so equal-cost candidates favor whichever was discovered
/// (and thus visited) first. Each node's neighbors are visited in ascending
/// id order — not petgraph's native reverse-insertion order — so that
/// "discovered first" among equal-cost neighbors means lowest id, matching
/// the spec's tie-break.
pub(crate) fn forward_layer(
    topology: &Topology,
    workload: &Workload,
    start: usize,
    layer: &Layer,
) -> ForwardResult {
    let n = topology.len();
    let mut visited = vec![false; n];
    let mut path_cost: HashMap<usize, u64> = HashMap::new();
    let mut prev: HashMap<usize, usize> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(u64, u64, usize)>> = BinaryHeap::new();
    let mut seq = 0u64;

    path_cost.insert(start, 0);
    heap.push(Reverse((0, seq, start)));
    seq += 1;

    let mut curr_costs: Vec<(usize, u64)> = Vec::with_capacity(n);
    let mut visited_count = 0usize;

    while visited_count < n {
        let Reverse((cost, _, curr)) = heap.pop().expect("worker graph is disconnected");
        if visited[curr] {
            continue;
        }
        visited[curr] = true;
        visited_count += 1;

        let proc = topology.flavor(curr).processing_cost(layer.color, layer.thickness);
        let mut total = cost + proc + workload.get(curr);
        if curr == 0 {
            total += ORIGIN_PENALTY;
        }
        curr_costs.push((curr, total));

        let mut neighbors: Vec<usize> = topology.graph.neighbors(curr).collect();
        neighbors.sort_unstable();
        for neighbor in neighbors {
            if visited[neighbor] {
                continue;
            }
            let mut cost_new = cost + 1;
            if neighbor == 0 {
                cost_new += ORIGIN_PENALTY;
            }
            let better = match path_cost.get(&neighbor) {
                None => true,
                Some(&existing) => cost_new < existing,
            };
            if better {
                path_cost.insert(neighbor, cost_new);
                prev.insert(neighbor, curr);
                heap.push(Reverse((cost_new, seq, neighbor)));
                seq += 1;
            }
        }
    }

    let mut best_cost = u64::MAX;
    let mut best_cand = start;
    for &(cand, cost) in &curr_costs {
        if cost < best_cost {
            best_cost = cost;
            best_cand = cand;
        }
    }

    let mut path = Vec::new();
    if best_cand != start {
        let mut rev = vec![best_cand];
        while *rev.last().unwrap() != start {
            rev.push(prev[rev.last().unwrap()]);
        }
        rev.reverse();
        path = rev;
    }

    let proc_cost = topology.flavor(best_cand).processing_cost(layer.color, layer.thickness);
    ForwardResult {
        candidate: best_cand,
        path,
        proc_cost,
    }
}

/// Finds the cheapest path from `start` back to `target`, weighting each
/// hop by the *destination's* current aggregate workload rather than a
/// fixed per-edge cost. Stops as soon as `target` is popped from the heap.
pub(crate) fn return_path(
    topology: &Topology,
    workload: &Workload,
    start: usize,
    target: usize,
) -> Vec<usize> {
    if start == target {
        return Vec::new();
    }

    let n = topology.len();
    let mut visited = vec![false; n];
    let mut costs: HashMap<usize, u64> = HashMap::new();
    let mut prev: HashMap<usize, usize> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(u64, u64, usize)>> = BinaryHeap::new();
    let mut seq = 0u64;

    heap.push(Reverse((0, seq, start)));
    seq += 1;

    while !visited[target] {
        let Reverse((cost, _, curr)) = heap.pop().expect("worker graph is disconnected");
        if visited[curr] {
            continue;
        }
        visited[curr] = true;

        let mut neighbors: Vec<usize> = topology.graph.neighbors(curr).collect();
        neighbors.sort_unstable();
        for neighbor in neighbors {
            if visited[neighbor] {
                continue;
            }
            let cost_new = cost + workload.get(neighbor);
            let better = match costs.get(&neighbor) {
                None => true,
                Some(&existing) => cost_new < existing,
            };
            if better {
                costs.insert(neighbor, cost_new);
                prev.insert(neighbor, curr);
                heap.push(Reverse((cost_new, seq, neighbor)));
                seq += 1;
            }
        }
    }

    let mut path = vec![target];
    while *path.last().unwrap() != start {
        path.push(prev[path.last().unwrap()]);
    }
    path.reverse();
    path
}
