//! WebSocket connection to the chat server.
//!
//! The socket is split into a reader task that turns frames into invite events and a writer
//! task that drains outbound messages. The invite controller never touches the socket; it
//! only pushes onto the outbound channel through [`ChannelTransport`].

use crate::error::CliError;
use crate::output::{emit, Emitted, OutputFormat};
use anyhow::{anyhow, Result};
use futures::{SinkExt, StreamExt};
use roomcall_core::{InviteError, InviteEvent, OutboundMessage, Transport};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_NODE_URL: &str = "ws://127.0.0.1:4001/socket";

pub struct Connection {
    pub invites: mpsc::UnboundedReceiver<InviteEvent>,
    outbound: mpsc::UnboundedSender<OutboundMessage>,
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
}

impl Connection {
    pub async fn connect(node_url: &str) -> Result<Self> {
        let url = parse_node_url(node_url)?;
        info!("Connecting to chat server at: {}", url);

        let (ws_stream, _) = connect_async(url.as_str())
            .await
            .map_err(|e| CliError::WebSocket(format!("Failed to connect: {}", e)))?;

        info!("WebSocket connected successfully");

        let (mut sink, mut stream) = ws_stream.split();
        let (invite_tx, invites) = mpsc::unbounded_channel();
        let (outbound, mut outbound_rx) = mpsc::unbounded_channel::<OutboundMessage>();

        let reader = tokio::spawn(async move {
            while let Some(frame) = stream.next().await {
                let frame = match frame {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("WebSocket read failed: {}", e);
                        break;
                    }
                };
                match frame {
                    Message::Text(_) => {
                        let Ok(text) = frame.to_text() else { continue };
                        match serde_json::from_str::<InviteEvent>(text) {
                            Ok(event) => {
                                if invite_tx.send(event).is_err() {
                                    break;
                                }
                            }
                            Err(e) => debug!("Ignoring non-invite frame: {}", e),
                        }
                    }
                    Message::Close(_) => {
                        info!("Server closed the connection");
                        break;
                    }
                    _ => {}
                }
            }
        });

        let writer = tokio::spawn(async move {
            while let Some(message) = outbound_rx.recv().await {
                let json = match message.to_json() {
                    Ok(json) => json,
                    Err(e) => {
                        warn!("Failed to serialize {}: {}", message.op(), e);
                        continue;
                    }
                };
                if let Err(e) = sink.send(Message::text(json)).await {
                    warn!("WebSocket write failed: {}", e);
                    break;
                }
            }
            if let Err(e) = sink.close().await {
                debug!("WebSocket close failed: {}", e);
            }
        });

        Ok(Self {
            invites,
            outbound,
            reader,
            writer,
        })
    }

    pub fn transport(&self, format: OutputFormat) -> ChannelTransport {
        ChannelTransport {
            outbound: self.outbound.clone(),
            format,
        }
    }

    /// Stops reading, then lets the writer flush whatever is still queued.
    pub async fn shutdown(self) -> Result<()> {
        self.reader.abort();
        drop(self.outbound);
        self.writer
            .await
            .map_err(|e| anyhow!("Writer task failed: {}", e))
    }
}

/// Queues outbound messages for the writer task.
pub struct ChannelTransport {
    outbound: mpsc::UnboundedSender<OutboundMessage>,
    format: OutputFormat,
}

impl Transport for ChannelTransport {
    fn send(&mut self, message: OutboundMessage) -> Result<(), InviteError> {
        self.outbound
            .send(message.clone())
            .map_err(|_| InviteError::Transport("connection closed".to_string()))?;
        // Already queued; a failed echo must not read as a failed send.
        if let Err(e) = emit(&Emitted::Send { message }, self.format) {
            warn!("Failed to print outbound message: {}", e);
        }
        Ok(())
    }
}

pub fn parse_node_url(node_url: &str) -> Result<Url, CliError> {
    let url = Url::parse(node_url)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", node_url, e)))?;
    match url.scheme() {
        "ws" | "wss" => Ok(url),
        other => Err(CliError::InvalidInput(format!(
            "expected a ws:// or wss:// URL, got {}://",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomcall_core::RoomId;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::time::timeout;

    #[test]
    fn test_parse_node_url_accepts_websocket_schemes() {
        assert!(parse_node_url("ws://127.0.0.1:4001/socket").is_ok());
        assert!(parse_node_url("wss://chat.example.com/socket").is_ok());
    }

    #[test]
    fn test_parse_node_url_rejects_http() {
        assert!(matches!(
            parse_node_url("http://chat.example.com"),
            Err(CliError::InvalidInput(_))
        ));
        assert!(parse_node_url("not a url").is_err());
    }

    #[test]
    fn test_closed_channel_is_a_transport_error() {
        let (outbound, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut transport = ChannelTransport {
            outbound,
            format: OutputFormat::Json,
        };

        let result = transport.send(OutboundMessage::JoinRoom {
            room_id: "r1".into(),
        });

        assert_eq!(
            result,
            Err(InviteError::Transport("connection closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_connection_reads_invites_and_writes_outbound() -> Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            let (tcp, _) = listener.accept().await?;
            let mut ws = tokio_tungstenite::accept_async(tcp).await?;
            ws.send(Message::text(r#"{"op":"new_chat_msg","d":{}}"#)).await?;
            ws.send(Message::text(
                r#"{"type":"invite","roomId":"r1","roomName":"Foo","username":"alice","displayName":"Alice","avatarUrl":"","userId":"u1"}"#,
            ))
            .await?;
            let reply = ws
                .next()
                .await
                .ok_or_else(|| anyhow!("client closed before replying"))??;
            Ok::<_, anyhow::Error>(reply.to_text()?.to_string())
        });

        let mut connection = Connection::connect(&format!("ws://{}", addr)).await?;

        let event = timeout(Duration::from_secs(5), connection.invites.recv())
            .await?
            .ok_or_else(|| anyhow!("no invite received"))?;
        assert_eq!(event.room_id, RoomId::from("r1"));
        assert_eq!(event.user.display_name, "Alice");
        // The junk frame came first and was skipped.
        assert!(connection.invites.try_recv().is_err());

        let mut transport = connection.transport(OutputFormat::Json);
        transport.send(OutboundMessage::JoinRoom {
            room_id: "r1".into(),
        })?;

        let received = timeout(Duration::from_secs(5), server).await???;
        assert_eq!(received, r#"{"op":"join_room","data":{"roomId":"r1"}}"#);

        drop(transport);
        connection.shutdown().await
    }

    #[test]
    fn test_send_succeeds_once_queued() {
        let (outbound, mut rx) = mpsc::unbounded_channel();
        let mut transport = ChannelTransport {
            outbound,
            format: OutputFormat::Json,
        };

        let message = OutboundMessage::AddFromWaiting {
            room_id: "r2".into(),
            user_id: "u5".into(),
        };
        assert_eq!(transport.send(message.clone()), Ok(()));
        assert_eq!(rx.try_recv().ok(), Some(message));
    }
}
