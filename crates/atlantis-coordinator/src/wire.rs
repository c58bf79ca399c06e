use atlantis_core::{Flavor, Layer};
use serde::Deserialize;

/// A pearl as it appears on a worker's desk in the wire state.
///
/// `layers` is only present the first time a pearl is observed at the
/// gatekeeper; later sightings elsewhere reference it by id alone
/// (`{ "id": int }`), so a missing `layers` field defaults to empty rather
/// than failing to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePearl {
    pub id: u64,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// A worker's desk, as it appears in the wire state.
#[derive(Debug, Clone, Deserialize)]
pub struct WireWorker {
    pub id: usize,
    pub flavor: Flavor,
    #[serde(default)]
    pub desk: Vec<WirePearl>,
}

/// A single turn's state, as read one line at a time from the driver.
///
/// Extra fields the driver doesn't act on (a running score, say) are
/// ignored rather than rejected — `serde_json` skips unrecognized keys by
/// default, so no `score` field needs to exist here at all.
#[derive(Debug, Clone, Deserialize)]
pub struct WireState {
    pub workers: Vec<WireWorker>,
    #[serde(default)]
    pub neighbor_map: Vec<(usize, usize)>,
}
