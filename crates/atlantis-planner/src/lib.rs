//! The forward layer search and return-path search that turn one [`Pearl`]
//! into a fully committed [`Plan`], plus the [`Registry`] of in-flight
//! pearl state the executor consumes from.
//!
//! ## Operations
//!
//! - [`plan_pearl`] — the planner's single exposed operation: given a
//!   pearl and a mutable [`Workload`], synthesizes a plan and commits its
//!   cost into the aggregate workload.
//!
//! ## Supporting types
//!
//! - [`PlanStep`], [`Plan`] — the `(count, action)` entries a pearl works
//!   through, one turn at a time.
//! - [`PearlState`] — a registered pearl's remaining plan, work, and
//!   layer count.
//! - [`Registry`] — pearl id → [`PearlState`], owned by the coordinator.

mod plan;
mod registry;
mod search;

pub use plan::*;
pub use registry::*;
pub use search::*;

use atlantis_core::{Pearl, Topology, Workload};
use std::collections::VecDeque;

/// The origin penalty added whenever a search traversal enters (or selects)
/// the gatekeeper, node 0. See SPEC_FULL.md §4.1.
pub const ORIGIN_PENALTY: u64 = 10;

/// Synthesizes a full plan for `pearl`: one forward search per layer,
/// followed by a return-path search back to the gatekeeper.
///
/// The forward phase's local workload delta is committed into `workload`
/// *before* the return-path search runs, so the return path is costed
/// against workload that already reflects this pearl's own forward hops.
/// This ordering is load-bearing — see SPEC_FULL.md's "Planner
/// work-accounting asymmetry" design note — and must not be reordered.
pub fn plan_pearl(topology: &Topology, workload: &mut Workload, pearl: &Pearl) -> (Plan, u64) {
    let pid = pearl.id;
    let n = topology.len();
    let mut local = Workload::new(n);
    let mut steps: Vec<PlanStep> = Vec::new();
    let mut start = 0usize;

    for layer in &pearl.layers {
        let found = search::forward_layer(topology, workload, start, layer);
        emit_hops(&found.path, pid, &mut local, &mut steps);
        local.add(found.candidate, found.proc_cost);
        steps.push(PlanStep::nom(pid, found.proc_cost));
        start = found.candidate;
    }

    let mut work = 0u64;
    for w in 0..n {
        let delta = local.get(w);
        workload.add(w, delta);
        work += delta;
    }

    let ret_path = search::return_path(topology, workload, start, 0);
    if !ret_path.is_empty() {
        for window in ret_path.windows(2) {
            let (from, to) = (window[0], window[1]);
            workload.add(from, 1);
            steps.push(PlanStep::pass(pid, to));
            work += 1;
        }
    }

    log::debug!("[planner] pearl {pid}: {} steps, work {work}", steps.len());
    (Plan(VecDeque::from(steps)), work)
}

fn emit_hops(path: &[usize], pid: u64, local: &mut Workload, steps: &mut Vec<PlanStep>) {
    for window in path.windows(2) {
        let (from, to) = (window[0], window[1]);
        local.add(from, 1);
        steps.push(PlanStep::pass(pid, to));
    }
}
