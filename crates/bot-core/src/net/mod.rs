//! Wire envelopes and the transport seam consumed by the decision loop.

pub mod hub;
pub mod wire;

pub use hub::HubConnection;
pub use wire::{GameStateDto, InboundMessage, OutboundMessage, PlayerActionDto, RegisterDto};
