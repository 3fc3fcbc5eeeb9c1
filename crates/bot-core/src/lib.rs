//! Shared bot core primitives: entity codec, world snapshot model, agent state,
//! and the decision loop.
//!
//! This crate owns no sockets. The runner binary implements the transport seam
//! (`net::hub::HubConnection`) so the loop and its state machine stay testable
//! against in-memory fakes.

pub mod agent;
pub mod game;
pub mod net;
