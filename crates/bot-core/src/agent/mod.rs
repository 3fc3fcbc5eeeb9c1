//! Agent primitives: actions, shared state, the strategy seam, and the
//! decision loop that ties them together.

pub mod action;
pub mod r#loop;
pub mod state;
pub mod strategy;

pub use action::{Action, ActionKind};
pub use r#loop::{DecisionLoop, LoopConfig, LoopPhase, TickOutcome, tick};
pub use state::AgentState;
pub use strategy::{NearestFoodStrategy, Strategy};
