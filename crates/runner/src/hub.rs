use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::Mutex;

use arena_bot_core::net::hub::HubConnection;
use arena_bot_core::net::wire::{InboundMessage, OutboundMessage, PlayerActionDto, RegisterDto};

/// Write half of the hub session plus the shared liveness flag. The matching
/// [`HubReader`] is consumed by the inbound dispatch task.
pub struct HubClient {
    writer: Mutex<OwnedWriteHalf>,
    live: Arc<AtomicBool>,
}

pub struct HubReader {
    reader: BufReader<OwnedReadHalf>,
    live: Arc<AtomicBool>,
    line: String,
}

pub async fn connect(addr: &str) -> anyhow::Result<(HubClient, HubReader)> {
    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("connect runner at {addr}"))?;
    let (read, write) = stream.into_split();
    let live = Arc::new(AtomicBool::new(true));
    Ok((
        HubClient {
            writer: Mutex::new(write),
            live: live.clone(),
        },
        HubReader {
            reader: BufReader::new(read),
            live,
            line: String::new(),
        },
    ))
}

impl HubClient {
    pub async fn send(&self, message: &OutboundMessage) -> anyhow::Result<()> {
        let mut line = serde_json::to_string(message).context("encode outbound message")?;
        line.push('\n');
        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await.context("hub write")?;
        writer.flush().await.ok();
        Ok(())
    }

    /// One-time registration handshake, sent right after connect.
    pub async fn register(&self, token: &str, nickname: &str) -> anyhow::Result<()> {
        self.send(&OutboundMessage::Register(RegisterDto {
            token: token.to_string(),
            nickname: nickname.to_string(),
        }))
        .await
    }

    pub fn shutdown(&self) {
        self.live.store(false, Ordering::SeqCst);
    }
}

impl HubConnection for HubClient {
    fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    fn send_action<'a>(
        &'a self,
        action: &'a PlayerActionDto,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.send(&OutboundMessage::SendPlayerAction(action.clone()))
                .await
        })
    }
}

impl HubReader {
    /// Next inbound message. `None` means the runner closed the socket, which
    /// also drops liveness for the write half. Unparseable lines are logged
    /// and skipped; one garbled push must not take the session down.
    pub async fn next_message(&mut self) -> anyhow::Result<Option<InboundMessage>> {
        loop {
            self.line.clear();
            let n = self.reader.read_line(&mut self.line).await.context("hub read")?;
            if n == 0 {
                self.shutdown();
                return Ok(None);
            }
            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str(trimmed) {
                Ok(message) => return Ok(Some(message)),
                Err(err) => eprintln!("runner.hub.invalid_line err={err}"),
            }
        }
    }

    pub fn shutdown(&self) {
        self.live.store(false, Ordering::SeqCst);
    }
}
