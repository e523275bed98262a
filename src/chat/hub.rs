//! Chat Session Hub
//!
//! Keeps the open widget sessions of this process. Sessions vanish when
//! closed, when they sit idle past the configured timeout, or when the
//! process stops; nothing is written anywhere.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use super::client::ChatBackend;
use super::error::ChatError;
use super::session::ChatSession;
use super::transcript::{SendOutcome, Transcript};

/// Configuration for the session hub
#[derive(Debug, Clone)]
pub struct SessionsConfig {
    /// Maximum number of concurrently open sessions
    pub max_sessions: usize,
    /// Sessions untouched for this long are dropped
    pub idle_timeout: Duration,
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_timeout: Duration::from_secs(15 * 60),
        }
    }
}

struct Entry {
    session: ChatSession,
    last_active: Instant,
}

impl Entry {
    fn touch(&mut self) {
        self.last_active = Instant::now();
    }
}

pub struct ChatSessions {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    config: SessionsConfig,
}

impl Default for ChatSessions {
    fn default() -> Self {
        Self::new(SessionsConfig::default())
    }
}

impl ChatSessions {
    pub fn new(config: SessionsConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Open a greeted session
    pub async fn open(&self) -> Result<Transcript, ChatError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            Self::evict_idle(&mut sessions, self.config.idle_timeout);
        }
        if sessions.len() >= self.config.max_sessions {
            return Err(ChatError::TooManySessions);
        }

        let session = ChatSession::opened();
        let transcript = Transcript::from(&session);
        sessions.insert(
            session.id(),
            Entry {
                session,
                last_active: Instant::now(),
            },
        );

        tracing::info!(session = %transcript.id, open = sessions.len(), "Chat session opened");
        Ok(transcript)
    }

    pub async fn transcript(&self, id: Uuid) -> Result<Transcript, ChatError> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
        entry.touch();
        Ok(Transcript::from(&entry.session))
    }

    /// Close and forget a session
    pub async fn close(&self, id: Uuid) -> Result<(), ChatError> {
        let mut sessions = self.sessions.write().await;
        let mut entry = sessions.remove(&id).ok_or(ChatError::SessionNotFound(id))?;
        entry.session.close();

        tracing::info!(session = %id, open = sessions.len(), "Chat session closed");
        Ok(())
    }

    /// Send a user message and wait for the bot's reply.
    ///
    /// The hub lock is released while the remote call is in flight, so other
    /// sessions are not blocked by a slow reply.
    pub async fn send(
        &self,
        id: Uuid,
        text: &str,
        backend: &dyn ChatBackend,
    ) -> Result<SendOutcome, ChatError> {
        let pending = {
            let mut sessions = self.sessions.write().await;
            let entry = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
            entry.touch();
            let session = &mut entry.session;
            match session.begin_send(text) {
                Some(pending) => pending,
                None => {
                    tracing::debug!(session = %id, "Chat send ignored");
                    return Ok(SendOutcome {
                        accepted: false,
                        transcript: Transcript::from(&*session),
                    });
                }
            }
        };

        let reply = backend.reply(&pending.text).await;

        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
        entry.touch();
        entry.session.complete(pending.generation, reply);

        Ok(SendOutcome {
            accepted: true,
            transcript: Transcript::from(&entry.session),
        })
    }

    /// Drop sessions idle past the timeout; returns how many were dropped
    pub async fn sweep(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::evict_idle(&mut sessions, self.config.idle_timeout)
    }

    fn evict_idle(sessions: &mut HashMap<Uuid, Entry>, idle_timeout: Duration) -> usize {
        let before = sessions.len();
        // A session waiting on the remote reply stays until the reply lands
        sessions.retain(|_, entry| {
            entry.session.is_awaiting() || entry.last_active.elapsed() < idle_timeout
        });
        let dropped = before - sessions.len();
        if dropped > 0 {
            tracing::info!(dropped, open = sessions.len(), "Idle chat sessions dropped");
        }
        dropped
    }

    /// Sweep idle sessions on a fixed period until the task is aborted
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let hub = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                hub.sweep().await;
            }
        })
    }

    pub fn idle_timeout(&self) -> Duration {
        self.config.idle_timeout
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::session::{Sender, GREETING, REPLY_ERROR};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    struct Echo;

    #[async_trait]
    impl ChatBackend for Echo {
        async fn reply(&self, message: &str) -> Result<String, ChatError> {
            Ok(format!("echo: {}", message))
        }
    }

    struct Failing;

    #[async_trait]
    impl ChatBackend for Failing {
        async fn reply(&self, _message: &str) -> Result<String, ChatError> {
            Err(ChatError::Unavailable)
        }
    }

    struct Gated {
        gate: Notify,
    }

    #[async_trait]
    impl ChatBackend for Gated {
        async fn reply(&self, message: &str) -> Result<String, ChatError> {
            self.gate.notified().await;
            Ok(format!("late: {}", message))
        }
    }

    #[tokio::test]
    async fn test_open_send_close() {
        let hub = ChatSessions::default();
        let opened = hub.open().await.unwrap();
        assert_eq!(opened.messages[0].text, GREETING);

        let outcome = hub.send(opened.id, "hi", &Echo).await.unwrap();
        assert!(outcome.accepted);
        assert!(!outcome.transcript.awaiting_reply);
        let last = outcome.transcript.messages.last().unwrap();
        assert_eq!((last.sender, last.text.as_str()), (Sender::Bot, "echo: hi"));

        hub.close(opened.id).await.unwrap();
        assert!(matches!(
            hub.transcript(opened.id).await,
            Err(ChatError::SessionNotFound(_))
        ));
        assert!(hub.is_empty().await);
    }

    #[tokio::test]
    async fn test_failed_reply_shows_error_text() {
        let hub = ChatSessions::default();
        let id = hub.open().await.unwrap().id;
        let outcome = hub.send(id, "hi", &Failing).await.unwrap();
        assert_eq!(outcome.transcript.messages.last().unwrap().text, REPLY_ERROR);
    }

    #[tokio::test]
    async fn test_send_while_awaiting_is_rejected() {
        let hub = Arc::new(ChatSessions::default());
        let backend = Arc::new(Gated { gate: Notify::new() });
        let id = hub.open().await.unwrap().id;

        let first = {
            let hub = Arc::clone(&hub);
            let backend = Arc::clone(&backend);
            tokio::spawn(async move { hub.send(id, "first", backend.as_ref()).await })
        };

        while !hub.transcript(id).await.unwrap().awaiting_reply {
            tokio::task::yield_now().await;
        }

        let second = hub.send(id, "second", backend.as_ref()).await.unwrap();
        assert!(!second.accepted);
        assert_eq!(second.transcript.messages.len(), 2);

        backend.gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert!(first.accepted);
        let texts: Vec<&str> = first.transcript.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "first", "late: first"]);
    }

    #[tokio::test]
    async fn test_session_limit() {
        let hub = ChatSessions::new(SessionsConfig {
            max_sessions: 1,
            ..SessionsConfig::default()
        });
        hub.open().await.unwrap();
        assert!(matches!(hub.open().await, Err(ChatError::TooManySessions)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_sessions_are_reclaimed() {
        let hub = ChatSessions::new(SessionsConfig {
            max_sessions: 50,
            idle_timeout: Duration::from_secs(60),
        });
        for _ in 0..50 {
            hub.open().await.unwrap();
        }
        assert!(matches!(hub.open().await, Err(ChatError::TooManySessions)));

        tokio::time::advance(Duration::from_secs(61)).await;

        let fresh = hub.open().await.unwrap();
        assert_eq!(hub.len().await, 1);
        assert!(hub.transcript(fresh.id).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let hub = ChatSessions::new(SessionsConfig {
            max_sessions: 10,
            idle_timeout: Duration::from_secs(60),
        });
        let active = hub.open().await.unwrap().id;
        let idle = hub.open().await.unwrap().id;

        tokio::time::advance(Duration::from_secs(40)).await;
        hub.send(active, "still here", &Echo).await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;

        assert_eq!(hub.sweep().await, 1);
        assert!(hub.transcript(active).await.is_ok());
        assert!(matches!(
            hub.transcript(idle).await,
            Err(ChatError::SessionNotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_task_drops_idle_sessions() {
        let hub = Arc::new(ChatSessions::new(SessionsConfig {
            max_sessions: 10,
            idle_timeout: Duration::from_secs(60),
        }));
        hub.open().await.unwrap();
        let sweeper = hub.spawn_sweeper(Duration::from_secs(30));

        tokio::time::sleep(Duration::from_secs(95)).await;
        assert!(hub.is_empty().await);
        sweeper.abort();
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let hub = ChatSessions::default();
        let missing = Uuid::new_v4();
        assert!(matches!(
            hub.send(missing, "hi", &Echo).await,
            Err(ChatError::SessionNotFound(id)) if id == missing
        ));
    }
}
