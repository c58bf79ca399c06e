use atlantis_core::Action;
use std::collections::VecDeque;

/// One entry in a [`Plan`]: a repeat count and the action to repeat it for.
///
/// A `Nom` step's count is its processing cost (turns to dissolve a
/// layer); a `Pass` step's count is always 1, one hop per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    pub count: u64,
    pub action: Action,
}

impl PlanStep {
    pub fn nom(pearl_id: u64, count: u64) -> Self {
        Self {
            count,
            action: Action::Nom(pearl_id),
        }
    }

    pub fn pass(pearl_id: u64, to_worker: usize) -> Self {
        Self {
            count: 1,
            action: Action::Pass { pearl_id, to_worker },
        }
    }
}

/// A pearl's full turn-by-turn plan, consumed front to back.
#[derive(Debug, Clone)]
pub struct Plan(pub VecDeque<PlanStep>);

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn front(&self) -> Option<&PlanStep> {
        self.0.front()
    }
}

/// A registered pearl's remaining plan, total work, and layer count.
///
/// `work` is decremented every turn for observability; only `layers`
/// reaching zero marks the pearl [`finished`](PearlState::finished) — the
/// two are not required to hit zero on the same turn for a passing pearl.
#[derive(Debug, Clone)]
pub struct PearlState {
    pub id: u64,
    pub plan: Plan,
    pub work: u64,
    pub layers: u64,
    pub finished: bool,
}

impl PearlState {
    pub fn new(id: u64, plan: Plan, work: u64, layers: u64) -> Self {
        Self {
            id,
            plan,
            work,
            layers,
            finished: false,
        }
    }

    /// The next action this pearl would take, without consuming it.
    pub fn peek(&self) -> Action {
        self.plan
            .front()
            .expect("peek() called on an exhausted plan")
            .action
    }

    /// Advances the plan by one turn and returns the action taken.
    ///
    /// A step's count reaching zero pops it; a `Nom` step popping also
    /// decrements `layers`, marking the pearl finished once none remain.
    pub fn advance(&mut self) -> Action {
        let front = self
            .plan
            .0
            .front_mut()
            .expect("advance() called on an exhausted plan");
        front.count -= 1;
        let action = front.action;
        if front.count == 0 {
            self.plan.0.pop_front();
            if action.is_nom() {
                self.layers -= 1;
                if self.layers == 0 {
                    self.finished = true;
                }
            }
        }
        self.work = self.work.saturating_sub(1);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_of(steps: Vec<PlanStep>) -> Plan {
        Plan(VecDeque::from(steps))
    }

    #[test]
    fn advance_splits_multi_turn_nom() {
        let plan = plan_of(vec![PlanStep::nom(5, 2)]);
        let mut state = PearlState::new(5, plan, 2, 1);
        assert_eq!(state.advance(), Action::Nom(5));
        assert!(!state.finished);
        assert_eq!(state.advance(), Action::Nom(5));
        assert!(state.finished);
    }

    #[test]
    fn advance_on_pass_does_not_touch_layers() {
        let plan = plan_of(vec![PlanStep::pass(5, 1), PlanStep::nom(5, 1)]);
        let mut state = PearlState::new(5, plan, 2, 1);
        state.advance();
        assert!(!state.finished);
        assert_eq!(state.layers, 1);
        state.advance();
        assert!(state.finished);
    }
}
