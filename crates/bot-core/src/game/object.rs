use serde::{Deserialize, Serialize};

/// Arity of an entity state tuple: `[size, speed, heading, x, y, type]`.
pub const STATE_TUPLE_LEN: usize = 6;

/// Closed set of arena object kinds, each bound to a fixed wire code.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Player,
    Food,
    Wormhole,
    GasCloud,
    AsteroidField,
}

impl ObjectType {
    /// Direct code lookup. `None` for codes outside the table; callers decide
    /// whether that is fatal.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Player),
            2 => Some(Self::Food),
            3 => Some(Self::Wormhole),
            4 => Some(Self::GasCloud),
            5 => Some(Self::AsteroidField),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Player => 1,
            Self::Food => 2,
            Self::Wormhole => 3,
            Self::GasCloud => 4,
            Self::AsteroidField => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Any object placed in the arena, player or otherwise. Ids are stable across
/// ticks for the same physical object.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    pub size: i32,
    pub speed: i32,
    pub heading: i32,
    pub position: Position,
    pub object_type: ObjectType,
}

impl Entity {
    /// Self entity as known at registration time, before the first state push.
    /// The runner assigns these starting attributes to every new player.
    pub fn registered(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: 10,
            speed: 20,
            heading: 0,
            position: Position::default(),
            object_type: ObjectType::Player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// State tuple arity does not match the fixed wire layout.
    MalformedEntity { len: usize },
    /// Type code has no entry in the closed object-type table.
    UnknownEntityType { code: i32 },
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::MalformedEntity { len } => {
                write!(f, "malformed entity: expected {STATE_TUPLE_LEN} state values, got {len}")
            }
            CodecError::UnknownEntityType { code } => {
                write!(f, "unknown entity type code: {code}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Decodes one wire tuple into an [`Entity`]. The tuple must carry exactly
/// [`STATE_TUPLE_LEN`] values with the type code last; anything else is an
/// error, never truncated, padded, or defaulted.
pub fn decode_entity(id: impl Into<String>, state: &[i32]) -> Result<Entity, CodecError> {
    if state.len() != STATE_TUPLE_LEN {
        return Err(CodecError::MalformedEntity { len: state.len() });
    }
    let code = state[5];
    let object_type = ObjectType::from_code(code).ok_or(CodecError::UnknownEntityType { code })?;
    Ok(Entity {
        id: id.into(),
        size: state[0],
        speed: state[1],
        heading: state[2],
        position: Position {
            x: state[3],
            y: state[4],
        },
        object_type,
    })
}
