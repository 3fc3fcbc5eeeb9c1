use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::world::World;

/// Raw per-tick payload of `ReceiveGameState`. Maps are keyed by object id;
/// values are fixed-layout state tuples for the entity codec.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameStateDto {
    pub world: World,
    #[serde(default)]
    pub game_objects: HashMap<String, Vec<i32>>,
    #[serde(default)]
    pub player_objects: HashMap<String, Vec<i32>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub token: String,
    pub nickname: String,
}

/// Minimal outbound action payload: sender id, action code, heading.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerActionDto {
    pub player_id: String,
    pub action: i32,
    pub heading: i32,
}

/// Named messages the runner pushes to the bot.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "name", content = "payload")]
pub enum InboundMessage {
    Registered(String),
    ReceiveGameState(GameStateDto),
    ReceiveGameComplete(String),
    Disconnect(String),
}

/// Named messages the bot sends to the runner.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "name", content = "payload")]
pub enum OutboundMessage {
    Register(RegisterDto),
    SendPlayerAction(PlayerActionDto),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::object::Position;

    #[test]
    fn inbound_registered_parses_named_envelope() {
        let line = r#"{"name":"Registered","payload":"bot-42"}"#;
        let message: InboundMessage = serde_json::from_str(line).expect("valid envelope");
        assert_eq!(message, InboundMessage::Registered("bot-42".to_string()));
    }

    #[test]
    fn inbound_game_state_parses_camel_case_payload() {
        let line = r#"{
            "name": "ReceiveGameState",
            "payload": {
                "world": {"centerPoint": {"x": 0, "y": 0}, "radius": 500, "currentTick": 3},
                "gameObjects": {"f1": [3, 0, 0, 10, 10, 2]},
                "playerObjects": {"p1": [10, 20, 0, 5, 5, 1]}
            }
        }"#;
        let message: InboundMessage = serde_json::from_str(line).expect("valid envelope");
        let InboundMessage::ReceiveGameState(dto) = message else {
            panic!("expected game state message");
        };
        assert_eq!(dto.world.current_tick, 3);
        assert_eq!(dto.world.radius, 500);
        assert_eq!(dto.world.center_point, Position { x: 0, y: 0 });
        assert_eq!(dto.game_objects["f1"], vec![3, 0, 0, 10, 10, 2]);
        assert_eq!(dto.player_objects["p1"], vec![10, 20, 0, 5, 5, 1]);
    }

    #[test]
    fn inbound_game_state_tolerates_missing_maps() {
        let line = r#"{
            "name": "ReceiveGameState",
            "payload": {"world": {"centerPoint": {"x": 1, "y": 2}, "radius": 9, "currentTick": 1}}
        }"#;
        let message: InboundMessage = serde_json::from_str(line).expect("valid envelope");
        let InboundMessage::ReceiveGameState(dto) = message else {
            panic!("expected game state message");
        };
        assert!(dto.game_objects.is_empty());
        assert!(dto.player_objects.is_empty());
    }

    #[test]
    fn outbound_action_envelope_uses_wire_names() {
        let message = OutboundMessage::SendPlayerAction(PlayerActionDto {
            player_id: "p1".to_string(),
            action: 1,
            heading: 90,
        });
        let value = serde_json::to_value(&message).expect("serializable");
        assert_eq!(value["name"], "SendPlayerAction");
        assert_eq!(value["payload"]["playerId"], "p1");
        assert_eq!(value["payload"]["action"], 1);
        assert_eq!(value["payload"]["heading"], 90);
    }

    #[test]
    fn action_payload_round_trips() {
        let dto = PlayerActionDto {
            player_id: "p1".to_string(),
            action: 3,
            heading: 270,
        };
        let encoded = serde_json::to_string(&dto).expect("serializable");
        let decoded: PlayerActionDto = serde_json::from_str(&encoded).expect("deserializable");
        assert_eq!(decoded, dto);
    }
}
