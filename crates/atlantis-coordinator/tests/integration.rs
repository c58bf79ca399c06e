//! End-to-end turn sequences through [`Coordinator::process`], mirroring
//! the original `tests/test_atlantis.py` / `test_worker.py` scenarios
//! across all three scheduling disciplines.

use atlantis_core::Action;
use atlantis_coordinator::{Coordinator, WireState};
use atlantis_worker::Mode;

fn triangle_state(desks: [&str; 3]) -> WireState {
    let raw = format!(
        r#"{{"workers": [
            {{"id": 0, "flavor": "General", "desk": {d0}}},
            {{"id": 1, "flavor": "Vector", "desk": {d1}}},
            {{"id": 2, "flavor": "Matrix", "desk": {d2}}}
        ], "neighbor_map": [[0,1],[1,2],[0,2]], "score": 0}}"#,
        d0 = desks[0],
        d1 = desks[1],
        d2 = desks[2],
    );
    serde_json::from_str(&raw).unwrap()
}

const PEARL_5: &str = r#"[{"id": 5, "layers": [
    {"color": "Red", "thickness": 12},
    {"color": "Green", "thickness": 13}
]}]"#;

/// S3–S5: dispatch, 15 turns of sustained Nom, then the return Pass.
#[test]
fn pq_dispatch_sustain_and_return() {
    let mut coordinator = Coordinator::new(Mode::Pq);

    let actions = coordinator.process(&triangle_state([PEARL_5, "[]", "[]"]));
    assert_eq!(
        actions.get(&0),
        Some(&Action::Pass { pearl_id: 5, to_worker: 1 })
    );

    let resident = triangle_state(["[]", PEARL_5, "[]"]);
    for _ in 0..15 {
        let actions = coordinator.process(&resident);
        assert!(!actions.contains_key(&0));
        assert_eq!(actions.get(&1), Some(&Action::Nom(5)));
    }

    let actions = coordinator.process(&resident);
    assert_eq!(
        actions.get(&1),
        Some(&Action::Pass { pearl_id: 5, to_worker: 0 })
    );
}

/// Same scenario, but under FIFO: the plan is identical to PQ for a single
/// resident pearl, since there's nothing to reorder against.
#[test]
fn fifo_dispatch_sustain_and_return() {
    let mut coordinator = Coordinator::new(Mode::Fifo);

    let actions = coordinator.process(&triangle_state([PEARL_5, "[]", "[]"]));
    assert_eq!(
        actions.get(&0),
        Some(&Action::Pass { pearl_id: 5, to_worker: 1 })
    );

    let resident = triangle_state(["[]", PEARL_5, "[]"]);
    for _ in 0..15 {
        let actions = coordinator.process(&resident);
        assert_eq!(actions.get(&1), Some(&Action::Nom(5)));
    }
    let actions = coordinator.process(&resident);
    assert_eq!(
        actions.get(&1),
        Some(&Action::Pass { pearl_id: 5, to_worker: 0 })
    );
}

/// Two pearls land on the gatekeeper's desk the same turn; PQ drains them
/// by cost, preferring the one with less remaining work ahead of a Nom.
#[test]
fn pq_orders_two_simultaneous_arrivals_by_cost() {
    let mut coordinator = Coordinator::new(Mode::Pq);
    let both = r#"[
        {"id": 1, "layers": [{"color": "Red", "thickness": 1}]},
        {"id": 2, "layers": [{"color": "Blue", "thickness": 1}]}
    ]"#;
    let actions = coordinator.process(&triangle_state([both, "[]", "[]"]));
    // Gatekeeper only emits one action per turn even with two pearls queued.
    assert_eq!(actions.len(), 1);
    assert!(actions.contains_key(&0));
}

/// An empty-layers pearl is legal and never produces an action or a
/// lingering registry entry.
#[test]
fn zero_layer_pearl_is_evicted_silently() {
    let mut coordinator = Coordinator::new(Mode::Pq);
    let empty_pearl = r#"[{"id": 9, "layers": []}]"#;
    let actions = coordinator.process(&triangle_state([empty_pearl, "[]", "[]"]));
    assert!(actions.is_empty());

    // re-observing the same pearl id a second time is a no-op, not a re-registration
    let actions = coordinator.process(&triangle_state([empty_pearl, "[]", "[]"]));
    assert!(actions.is_empty());
}

/// A single isolated worker that is its own gatekeeper. With no neighbors,
/// every layer is necessarily processed right where it lands, so this
/// isolates round-robin behavior from any routing decision.
fn solo_state(desk: &str) -> WireState {
    let raw = format!(
        r#"{{"workers": [
            {{"id": 0, "flavor": "General", "desk": {desk}}}
        ], "neighbor_map": [], "score": 0}}"#,
    );
    serde_json::from_str(&raw).unwrap()
}

/// Round-robin: once two pearls share a worker's queue, the worker
/// alternates between them turn by turn rather than draining one to
/// completion first, and each leaves the cycle the turn it finishes.
#[test]
fn rr_alternates_between_two_resident_pearls() {
    let mut coordinator = Coordinator::new(Mode::Rr);
    let two_single_red = r#"[
        {"id": 1, "layers": [{"color": "Red", "thickness": 2}]},
        {"id": 2, "layers": [{"color": "Red", "thickness": 2}]}
    ]"#;
    let state = solo_state(two_single_red);

    let t1 = coordinator.process(&state);
    let t2 = coordinator.process(&state);
    let t3 = coordinator.process(&state);
    let t4 = coordinator.process(&state);

    assert_eq!(t1.get(&0), Some(&Action::Nom(1)));
    assert_eq!(t2.get(&0), Some(&Action::Nom(2)));
    assert_eq!(t3.get(&0), Some(&Action::Nom(1)));
    assert_eq!(t4.get(&0), Some(&Action::Nom(2)));

    // Both pearls are now finished (layers exhausted) with no return hops
    // needed — they were already home at the gatekeeper — so the registry
    // is empty on the turn after their last Nom.
    let t5 = coordinator.process(&solo_state("[]"));
    assert!(t5.is_empty());
}
