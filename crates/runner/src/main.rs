mod config;
mod hub;

use std::sync::Arc;

use arena_bot_core::agent::r#loop::{DecisionLoop, LoopConfig};
use arena_bot_core::agent::state::AgentState;
use arena_bot_core::agent::strategy::NearestFoodStrategy;
use arena_bot_core::game::object::Entity;
use arena_bot_core::game::snapshot::assemble;
use arena_bot_core::net::wire::InboundMessage;

use crate::config::Settings;
use crate::hub::HubReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    println!("runner.connect addr={}", settings.runner_addr);

    let (client, reader) = hub::connect(&settings.runner_addr).await?;
    let client = Arc::new(client);
    let state = Arc::new(AgentState::new());

    client.register(&settings.token, &settings.nickname).await?;
    println!("runner.register nickname={}", settings.nickname);

    let dispatch = tokio::spawn(dispatch_inbound(reader, state.clone()));

    let mut strategy = NearestFoodStrategy;
    let mut decision_loop = DecisionLoop::new(LoopConfig {
        warmup: settings.warmup,
        cadence: settings.cadence,
    });
    let result = decision_loop
        .run(client.as_ref(), state.as_ref(), &mut strategy)
        .await;

    client.shutdown();
    dispatch.abort();
    println!("runner.stopped");
    result
}

/// Explicit inbound dispatch loop: the sole writer of [`AgentState`]. Runs
/// until the runner disconnects us or the socket closes.
async fn dispatch_inbound(mut reader: HubReader, state: Arc<AgentState>) {
    loop {
        match reader.next_message().await {
            Ok(Some(message)) => {
                if !apply_message(&state, message) {
                    reader.shutdown();
                    return;
                }
            }
            Ok(None) => {
                println!("runner.hub.closed");
                return;
            }
            Err(err) => {
                eprintln!("runner.hub.error {err:#}");
                reader.shutdown();
                return;
            }
        }
    }
}

/// Applies one inbound message to shared state. Returns false when the
/// session is over.
fn apply_message(state: &AgentState, message: InboundMessage) -> bool {
    match message {
        InboundMessage::Registered(id) => {
            println!("runner.registered id={id}");
            state.set_bot(Entity::registered(id));
            true
        }
        InboundMessage::ReceiveGameState(dto) => {
            let tick = dto.world.current_tick;
            match assemble(dto.world, &dto.game_objects, &dto.player_objects) {
                Ok(snapshot) => state.set_snapshot(snapshot),
                // A bad tick is dropped whole; the prior snapshot stays valid.
                Err(err) => eprintln!("runner.state.discarded tick={tick} err={err}"),
            }
            true
        }
        InboundMessage::ReceiveGameComplete(result) => {
            println!("runner.game_complete result={result}");
            true
        }
        InboundMessage::Disconnect(id) => {
            println!("runner.disconnect id={id}");
            state.clear();
            false
        }
    }
}
