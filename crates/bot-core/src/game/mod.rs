//! Arena world model: entity decoding and per-tick snapshot assembly.

pub mod object;
pub mod snapshot;
pub mod world;

pub use object::{CodecError, Entity, ObjectType, Position, decode_entity};
pub use snapshot::{Snapshot, SnapshotDecodeFailed, assemble};
pub use world::World;
