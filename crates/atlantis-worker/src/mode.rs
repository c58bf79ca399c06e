/// A worker's scheduling discipline for pearls waiting on its desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Priority queue, ordered by [`Worker::compute_cost`](crate::Worker).
    #[default]
    Pq,
    /// First-in, first-out.
    Fifo,
    /// Round-robin.
    Rr,
}

impl Mode {
    /// Parses a mode from a CLI-style token, falling back to [`Mode::Pq`]
    /// for anything unrecognized rather than rejecting the argument — the
    /// driver always has a usable default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "fifo" => Mode::Fifo,
            "rr" => Mode::Rr,
            _ => Mode::Pq,
        }
    }
}
