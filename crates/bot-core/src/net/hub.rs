use std::future::Future;
use std::pin::Pin;

use super::wire::PlayerActionDto;

/// Boundary the decision loop uses to observe connection liveness and emit
/// actions. The runner implements this over its hub session; tests use
/// in-memory fakes.
pub trait HubConnection: Send + Sync {
    /// Current liveness of the underlying session. Cheap; the loop polls it
    /// twice per tick.
    fn is_live(&self) -> bool;

    fn send_action<'a>(
        &'a self,
        action: &'a PlayerActionDto,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;
}
