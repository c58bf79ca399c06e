use crate::PearlState;
use std::collections::HashMap;

/// Pearl id → [`PearlState`], the coordinator's table of in-flight plans.
#[derive(Debug, Clone, Default)]
pub struct Registry(HashMap<u64, PearlState>);

impl Registry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn contains(&self, id: u64) -> bool {
        self.0.contains_key(&id)
    }

    pub fn get(&self, id: u64) -> Option<&PearlState> {
        self.0.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut PearlState> {
        self.0.get_mut(&id)
    }

    pub fn register(&mut self, state: PearlState) {
        self.0.insert(state.id, state);
    }

    /// Removes every pearl whose `work` has reached zero.
    ///
    /// Keyed off `work`, not `finished` — a pearl whose plan has just
    /// emitted its last step can still have `work == 0` one turn before
    /// `finished` is observed elsewhere, and the original sweep keys off
    /// work too.
    pub fn evict_finished(&mut self) {
        self.0.retain(|_, state| state.work != 0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
