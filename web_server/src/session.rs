//! Stream subscriber registry.
//!
//! Each connected observer is represented by the sending half of a bounded
//! channel; the connection task owns the receiving half and drains it into
//! its WebSocket sink. Broadcasting therefore never touches a socket
//! directly: a dead or stalled subscriber costs at most the per-send
//! timeout, is reaped, and cannot block delivery to the others.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};
use uuid::Uuid;
use web_common::StreamEvent;

/// Upper bound on one subscriber's delivery before it is declared dead.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(1);

/// Outbound frames buffered per connection before sends start blocking.
pub const CLIENT_CHANNEL_CAPACITY: usize = 64;

/// A connected client: identity plus its outbound frame channel.
#[derive(Clone)]
pub struct Client {
    pub id: Uuid,
    tx: mpsc::Sender<Message>,
}

impl Client {
    fn new(tx: mpsc::Sender<Message>) -> Self {
        Client {
            id: Uuid::new_v4(),
            tx,
        }
    }

    /// Serialize and queue one event for this client.
    pub async fn send(&self, event: &StreamEvent) -> Result<(), String> {
        let json = serde_json::to_string(event)
            .map_err(|e| format!("Serialization error: {}", e))?;
        match timeout(SEND_TIMEOUT, self.tx.send(Message::Text(json))).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(_)) => Err("connection closed".to_string()),
            Err(_) => Err("send timed out".to_string()),
        }
    }
}

/// Manages all connected stream clients.
pub struct ClientManager {
    clients: RwLock<HashMap<Uuid, Client>>,
}

impl ClientManager {
    pub fn new() -> Self {
        ClientManager {
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new client and return its ID.
    pub async fn register(&self, tx: mpsc::Sender<Message>) -> Uuid {
        let client = Client::new(tx);
        let id = client.id;
        let mut clients = self.clients.write().await;
        clients.insert(id, client);
        info!("Client {} registered ({} total)", id, clients.len());
        id
    }

    /// Remove a client; its channel closes when the last sender drops.
    pub async fn unregister(&self, client_id: Uuid) {
        let mut clients = self.clients.write().await;
        if clients.remove(&client_id).is_some() {
            info!("Client {} unregistered ({} remaining)", client_id, clients.len());
        }
    }

    pub async fn count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Send an event to one specific client.
    pub async fn send_to(&self, client_id: Uuid, event: &StreamEvent) {
        let client = {
            let clients = self.clients.read().await;
            clients.get(&client_id).cloned()
        };
        if let Some(client) = client {
            if let Err(e) = client.send(event).await {
                warn!("Failed to send to client {}: {}", client_id, e);
            }
        }
    }

    /// Deliver an event to every registered client.
    ///
    /// A failed delivery is logged and the subscriber reaped; it never stops
    /// delivery to the remaining clients and never surfaces to the caller.
    pub async fn broadcast(&self, event: &StreamEvent) {
        let clients: Vec<Client> = {
            let clients = self.clients.read().await;
            clients.values().cloned().collect()
        };

        let mut dead = Vec::new();
        for client in clients {
            if let Err(e) = client.send(event).await {
                warn!("Dropping client {}: {}", client.id, e);
                dead.push(client.id);
            }
        }
        for id in dead {
            self.unregister(id).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_common::Pose;

    fn state_event() -> StreamEvent {
        StreamEvent::JointState {
            angles: vec![0.0; 7],
            end_effector: Pose::identity(),
        }
    }

    #[tokio::test]
    async fn test_register_and_unregister() {
        let manager = ClientManager::new();
        let (tx, _rx) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);

        let id = manager.register(tx).await;
        assert_eq!(manager.count().await, 1);

        manager.unregister(id).await;
        assert_eq!(manager.count().await, 0);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_all_live_clients() {
        let manager = ClientManager::new();
        let (tx_a, mut rx_a) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);
        let (tx_b, mut rx_b) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);
        manager.register(tx_a).await;
        manager.register(tx_b).await;

        manager.broadcast(&state_event()).await;

        assert!(matches!(rx_a.recv().await, Some(Message::Text(_))));
        assert!(matches!(rx_b.recv().await, Some(Message::Text(_))));
    }

    #[tokio::test]
    async fn test_broadcast_survives_a_dead_subscriber() {
        let manager = ClientManager::new();
        let (tx_dead, rx_dead) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);
        let (tx_live, mut rx_live) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);
        manager.register(tx_dead).await;
        let live_id = manager.register(tx_live).await;

        // Simulate a closed connection: the reader half is gone.
        drop(rx_dead);

        manager.broadcast(&state_event()).await;

        // The live client still got the frame, the dead one was reaped.
        assert!(matches!(rx_live.recv().await, Some(Message::Text(_))));
        assert_eq!(manager.count().await, 1);

        let clients = manager.clients.read().await;
        assert!(clients.contains_key(&live_id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_subscriber_is_reaped_after_timeout() {
        let manager = ClientManager::new();
        // Capacity 1 and a reader that never drains: the second send blocks
        // until the timeout trips.
        let (tx, _rx) = mpsc::channel(1);
        manager.register(tx).await;

        manager.broadcast(&state_event()).await;
        manager.broadcast(&state_event()).await;

        assert_eq!(manager.count().await, 0);
    }

    #[tokio::test]
    async fn test_send_to_only_reaches_target() {
        let manager = ClientManager::new();
        let (tx_a, mut rx_a) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);
        let (tx_b, mut rx_b) = mpsc::channel(CLIENT_CHANNEL_CAPACITY);
        let id_a = manager.register(tx_a).await;
        manager.register(tx_b).await;

        manager.send_to(id_a, &state_event()).await;

        assert!(matches!(rx_a.recv().await, Some(Message::Text(_))));
        assert!(rx_b.try_recv().is_err());
    }
}
