use crate::WireState;
use atlantis_core::{Action, Flavor, Graph, Pearl, Topology, Workload};
use atlantis_planner::{plan_pearl, PearlState, Registry};
use atlantis_worker::{Mode, Worker};
use std::collections::BTreeMap;

/// Coordinates planning and per-turn dispatch for the whole worker graph.
///
/// Topology is established lazily, from the first [`WireState`] ever
/// passed to [`process`](Coordinator::process), and never rebuilt
/// afterward — the worker graph and flavors are fixed for the run.
pub struct Coordinator {
    mode: Mode,
    initialized: bool,
    topology: Option<Topology>,
    workload: Option<Workload>,
    workers: Vec<Worker>,
    registry: Registry,
}

impl Coordinator {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            initialized: false,
            topology: None,
            workload: None,
            workers: Vec::new(),
            registry: Registry::new(),
        }
    }

    fn initialize(&mut self, state: &WireState) {
        let n = state.workers.len();
        let mut flavors: Vec<Option<Flavor>> = vec![None; n];
        let mut workers: Vec<Option<Worker>> = (0..n).map(|_| None).collect();

        for wire_worker in &state.workers {
            assert!(
                wire_worker.id < n,
                "worker id {} out of range for {n} declared workers",
                wire_worker.id
            );
            assert!(
                flavors[wire_worker.id].is_none(),
                "duplicate worker id {} in initial state",
                wire_worker.id
            );
            flavors[wire_worker.id] = Some(wire_worker.flavor);
            workers[wire_worker.id] = Some(Worker::new(wire_worker.id, self.mode));
        }

        let flavors: Vec<Flavor> = flavors
            .into_iter()
            .enumerate()
            .map(|(id, f)| f.unwrap_or_else(|| panic!("worker id {id} missing from initial state")))
            .collect();
        self.workers = workers
            .into_iter()
            .enumerate()
            .map(|(id, w)| w.unwrap_or_else(|| panic!("worker id {id} missing from initial state")))
            .collect();

        let graph = Graph::new(n, &state.neighbor_map);
        self.topology = Some(Topology { graph, flavors });
        self.workload = Some(Workload::new(n));
        self.initialized = true;
        log::info!("[coordinator] initialized with {n} workers");
    }

    /// Processes one turn: registers any pearls newly seen at the
    /// gatekeeper, dispatches every worker, and evicts pearls whose plans
    /// have fully run their course.
    pub fn process(&mut self, state: &WireState) -> BTreeMap<usize, Action> {
        if !self.initialized {
            self.initialize(state);
        }

        let topology = self
            .topology
            .as_ref()
            .expect("coordinator processed a turn without a topology");
        let workload = self
            .workload
            .as_mut()
            .expect("coordinator processed a turn without a workload");

        let gatekeeper = state
            .workers
            .iter()
            .find(|w| w.id == 0)
            .expect("wire state is missing the gatekeeper worker (id 0)");
        for wire_pearl in &gatekeeper.desk {
            if self.registry.contains(wire_pearl.id) {
                continue;
            }
            let pearl = Pearl {
                id: wire_pearl.id,
                layers: wire_pearl.layers.clone(),
            };
            let layers = pearl.layers.len() as u64;
            let (plan, work) = plan_pearl(topology, workload, &pearl);
            self.registry.register(PearlState::new(pearl.id, plan, work, layers));
        }

        let mut actions = BTreeMap::new();
        for wire_worker in &state.workers {
            let desk_ids: Vec<u64> = wire_worker.desk.iter().map(|p| p.id).collect();
            let worker = self
                .workers
                .get_mut(wire_worker.id)
                .expect("worker id absent from the initialized roster");
            if let Some(action) = worker.process(&desk_ids, &mut self.registry) {
                actions.insert(wire_worker.id, action);
                workload.decrement(wire_worker.id);
            }
        }

        self.registry.evict_finished();
        actions
    }
}
