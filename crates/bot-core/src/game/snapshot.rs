use std::collections::HashMap;

use super::object::{CodecError, Entity, decode_entity};
use super::world::World;

/// Complete per-tick view of the arena. Built whole, published whole; readers
/// never see a partially assembled snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub world: World,
    /// Non-player objects as delivered by the runner. No iteration-order
    /// guarantee.
    pub entities: Vec<Entity>,
    /// Player-controlled objects as delivered, which may include this agent.
    pub player_entities: Vec<Entity>,
}

/// One entry failed to decode, so the whole tick is unusable. The previously
/// published snapshot stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDecodeFailed {
    pub object_id: String,
    pub source: CodecError,
}

impl std::fmt::Display for SnapshotDecodeFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "snapshot decode failed at object {}: {}", self.object_id, self.source)
    }
}

impl std::error::Error for SnapshotDecodeFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Decodes every raw entry and partitions the results by input map.
/// All-or-nothing: the first failing entry aborts the whole assembly.
pub fn assemble(
    world: World,
    game_objects: &HashMap<String, Vec<i32>>,
    player_objects: &HashMap<String, Vec<i32>>,
) -> Result<Snapshot, SnapshotDecodeFailed> {
    Ok(Snapshot {
        world,
        entities: decode_map(game_objects)?,
        player_entities: decode_map(player_objects)?,
    })
}

fn decode_map(raw: &HashMap<String, Vec<i32>>) -> Result<Vec<Entity>, SnapshotDecodeFailed> {
    let mut entities = Vec::with_capacity(raw.len());
    for (id, state) in raw {
        let entity = decode_entity(id.clone(), state).map_err(|source| SnapshotDecodeFailed {
            object_id: id.clone(),
            source,
        })?;
        entities.push(entity);
    }
    Ok(entities)
}
