use serde::{Deserialize, Serialize};

use super::object::Position;

/// Arena-level record, one per tick. `current_tick` is expected to be
/// monotonic but is not enforced here; state publication is last-write-wins.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub center_point: Position,
    pub radius: i32,
    pub current_tick: u64,
}
