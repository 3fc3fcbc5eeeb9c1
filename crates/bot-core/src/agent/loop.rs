use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::net::hub::HubConnection;

use super::action::Action;
use super::state::AgentState;
use super::strategy::Strategy;

/// Loop state machine. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    AwaitingRegistration,
    Active,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Connection is no longer live; the loop must stop.
    Stopped,
    /// No registered bot yet. Nothing sent; not an error.
    NotReady,
    /// Strategy decided there is nothing to send this tick.
    Idle,
    /// Strategy errored. The tick is skipped; the loop continues.
    StrategyFailed { reason: String },
    /// Liveness dropped between the decision and the send; action discarded.
    Discarded,
    /// Exactly one action went out for this tick.
    Sent { action: Action },
}

/// One decision-loop iteration.
///
/// Deliberately small and timer-free, in the same shape as the inbound
/// dispatch: [`DecisionLoop::run`] owns the cadence, this owns the per-tick
/// contract. Liveness is checked on entry and again right before the send,
/// since the strategy can take long enough for the connection to die under it.
/// The action's sender id is always the agent's own id; a buggy strategy
/// cannot spoof another player's.
pub async fn tick(
    hub: &dyn HubConnection,
    state: &AgentState,
    strategy: &mut dyn Strategy,
) -> anyhow::Result<TickOutcome> {
    if !hub.is_live() {
        return Ok(TickOutcome::Stopped);
    }

    let Some(bot) = state.bot() else {
        return Ok(TickOutcome::NotReady);
    };
    let snapshot = state.snapshot();

    let decided = match strategy.decide(&bot, snapshot.as_deref()) {
        Ok(decided) => decided,
        Err(err) => {
            return Ok(TickOutcome::StrategyFailed {
                reason: format!("{err:#}"),
            });
        }
    };
    let Some(mut action) = decided else {
        return Ok(TickOutcome::Idle);
    };
    action.player_id = bot.id.clone();

    if !hub.is_live() {
        return Ok(TickOutcome::Discarded);
    }
    hub.send_action(&action.encode()).await?;
    Ok(TickOutcome::Sent { action })
}

#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Head start given to the registration ack before the first tick-read.
    pub warmup: Duration,
    /// Fixed interval between iterations. Soft bound; missed ticks are not
    /// made up.
    pub cadence: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            warmup: Duration::from_secs(1),
            cadence: Duration::from_millis(20),
        }
    }
}

/// Cadence driver around [`tick`]. Runs until the connection dies or a send
/// fails; once stopped it stays stopped, re-entering `run` sends nothing.
#[derive(Debug)]
pub struct DecisionLoop {
    cfg: LoopConfig,
    phase: LoopPhase,
}

impl DecisionLoop {
    pub fn new(cfg: LoopConfig) -> Self {
        Self {
            cfg,
            phase: LoopPhase::AwaitingRegistration,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub async fn run(
        &mut self,
        hub: &dyn HubConnection,
        state: &AgentState,
        strategy: &mut dyn Strategy,
    ) -> anyhow::Result<()> {
        if self.phase == LoopPhase::Stopped {
            return Ok(());
        }

        tokio::time::sleep(self.cfg.warmup).await;

        let mut cadence = tokio::time::interval(self.cfg.cadence);
        cadence.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            cadence.tick().await;
            match tick(hub, state, strategy).await {
                Ok(TickOutcome::Stopped) => {
                    self.phase = LoopPhase::Stopped;
                    println!("agent.loop.stopped");
                    return Ok(());
                }
                Ok(TickOutcome::NotReady) => {
                    // Not ready is the expected pre-registration condition;
                    // stay quiet and wait for the next tick.
                }
                Ok(outcome) => {
                    if self.phase == LoopPhase::AwaitingRegistration {
                        self.phase = LoopPhase::Active;
                        println!("agent.loop.active");
                    }
                    match outcome {
                        TickOutcome::StrategyFailed { reason } => {
                            eprintln!("agent.tick.strategy_failed strategy={} reason={reason}", strategy.name());
                        }
                        TickOutcome::Discarded => {
                            println!("agent.tick.discarded");
                        }
                        _ => {}
                    }
                }
                Err(err) => {
                    // A failed send means the session is gone.
                    self.phase = LoopPhase::Stopped;
                    eprintln!("agent.loop.send_error {err:#}");
                    return Err(err);
                }
            }
        }
    }
}
