use crate::Mode;
use atlantis_core::Action;
use atlantis_planner::{PearlState, Registry};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// Added to a pearl's cost when its next step is a `Nom`, so that passing
/// pearls along are preferred over holding one to chew through a layer.
const NOM_PENALTY: u64 = 20;

enum Queue {
    Pq(BinaryHeap<Reverse<(u64, u64)>>),
    Deque(VecDeque<u64>),
}

/// One worker's desk: a scheduling queue over the pearl ids it has admitted
/// plus the set it has already admitted, so a pearl sitting on the desk
/// across turns isn't re-queued every time it's observed.
pub struct Worker {
    pub id: usize,
    mode: Mode,
    queue: Queue,
    seen: HashSet<u64>,
}

impl Worker {
    pub fn new(id: usize, mode: Mode) -> Self {
        let queue = match mode {
            Mode::Pq => Queue::Pq(BinaryHeap::new()),
            Mode::Fifo | Mode::Rr => Queue::Deque(VecDeque::new()),
        };
        Self {
            id,
            mode,
            queue,
            seen: HashSet::new(),
        }
    }

    /// Cost of processing `pearl` next.
    ///
    /// A finished pearl (waiting only to be passed home) always costs
    /// zero, so it's drained ahead of anything still mid-layer. Otherwise
    /// cost is the pearl's remaining work, plus a fixed penalty if the
    /// next step is a `Nom` or the pearl's remaining layer count if it's
    /// a `Pass` — biasing the queue toward moving pearls along.
    pub fn compute_cost(pearl: &PearlState) -> u64 {
        if pearl.finished {
            return 0;
        }
        let mut cost = pearl.work;
        match pearl.peek() {
            Action::Nom(_) => cost += NOM_PENALTY,
            Action::Pass { .. } => cost += pearl.layers,
        }
        cost
    }

    fn resolve(&mut self, desk: &[u64], registry: &Registry) {
        for &pid in desk {
            if self.seen.contains(&pid) {
                continue;
            }
            let pearl = registry
                .get(pid)
                .expect("worker observed a pearl id with no planner registration");
            // A zero-layer pearl plans to an empty Plan (no hops, no noms). Admitting it
            // here would hand advance() nothing to advance. Leave it unseen; the
            // registry reaps it via evict_finished() since its work is already zero.
            if pearl.plan.is_empty() {
                continue;
            }
            self.seen.insert(pid);
            match &mut self.queue {
                Queue::Deque(queue) => queue.push_back(pid),
                Queue::Pq(heap) => {
                    let cost = Self::compute_cost(pearl);
                    heap.push(Reverse((cost, pid)));
                }
            }
        }
    }

    /// Admits any newly observed pearls, then emits this turn's action, if
    /// any, per the worker's scheduling discipline.
    pub fn process(&mut self, desk: &[u64], registry: &mut Registry) -> Option<Action> {
        self.resolve(desk, registry);
        let action = match self.mode {
            Mode::Pq => self.process_pq(registry),
            Mode::Fifo => self.process_fifo(registry),
            Mode::Rr => self.process_rr(registry),
        };
        log::debug!("[worker {}] emitted {action:?}", self.id);
        action
    }

    fn process_pq(&mut self, registry: &mut Registry) -> Option<Action> {
        let Queue::Pq(heap) = &mut self.queue else {
            unreachable!("pq worker must hold a priority queue")
        };
        let Reverse((_, pid)) = heap.pop()?;
        let pearl = registry
            .get_mut(pid)
            .expect("queued pearl missing from registry");
        let action = pearl.advance();
        if pearl.finished || action.is_pass() {
            self.seen.remove(&pid);
        } else {
            let cost = Self::compute_cost(pearl);
            heap.push(Reverse((cost, pid)));
        }
        Some(action)
    }

    fn process_fifo(&mut self, registry: &mut Registry) -> Option<Action> {
        let Queue::Deque(queue) = &mut self.queue else {
            unreachable!("fifo worker must hold a deque")
        };
        let &pid = queue.front()?;
        let pearl = registry
            .get_mut(pid)
            .expect("queued pearl missing from registry");
        let action = pearl.advance();
        if pearl.finished {
            self.seen.remove(&pid);
            queue.pop_front();
        } else if action.is_pass() {
            queue.pop_front();
            self.seen.remove(&pid);
        }
        Some(action)
    }

    fn process_rr(&mut self, registry: &mut Registry) -> Option<Action> {
        let Queue::Deque(queue) = &mut self.queue else {
            unreachable!("rr worker must hold a deque")
        };
        let pid = queue.pop_front()?;
        let pearl = registry
            .get_mut(pid)
            .expect("queued pearl missing from registry");
        let action = pearl.advance();
        if pearl.finished || action.is_pass() {
            self.seen.remove(&pid);
        } else {
            queue.push_back(pid);
        }
        Some(action)
    }
}
