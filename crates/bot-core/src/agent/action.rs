use serde::{Deserialize, Serialize};

use crate::net::wire::PlayerActionDto;

/// Closed set of player actions, each bound to a fixed wire code.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Forward,
    Stop,
    StartAfterburner,
    StopAfterburner,
}

impl ActionKind {
    pub fn code(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Stop => 2,
            Self::StartAfterburner => 3,
            Self::StopAfterburner => 4,
        }
    }
}

/// Outbound decision for one tick. The loop stamps `player_id` with the
/// agent's own id before sending, whatever the strategy produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub player_id: String,
    pub kind: ActionKind,
    /// Degrees; meaningful only for kinds that imply directed motion.
    pub heading: i32,
}

impl Action {
    pub fn new(kind: ActionKind, heading: i32) -> Self {
        Self {
            player_id: String::new(),
            kind,
            heading,
        }
    }

    /// Encodes to the minimal payload the transport needs. There is no inverse
    /// on this side; the runner is the only consumer of action payloads.
    pub fn encode(&self) -> PlayerActionDto {
        PlayerActionDto {
            player_id: self.player_id.clone(),
            action: self.kind.code(),
            heading: self.heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_codes_match_the_table() {
        assert_eq!(ActionKind::Forward.code(), 1);
        assert_eq!(ActionKind::Stop.code(), 2);
        assert_eq!(ActionKind::StartAfterburner.code(), 3);
        assert_eq!(ActionKind::StopAfterburner.code(), 4);
    }

    #[test]
    fn encode_carries_id_code_and_heading() {
        let action = Action {
            player_id: "bot-1".to_string(),
            kind: ActionKind::StartAfterburner,
            heading: 180,
        };
        let dto = action.encode();
        assert_eq!(dto.player_id, "bot-1");
        assert_eq!(dto.action, 3);
        assert_eq!(dto.heading, 180);
    }
}
