//! Redis Streams producer for like events.
//!
//! Every event becomes one stream entry with a single `event` field holding
//! the binary envelope. The entry id returned by `XADD` is the broker's
//! acknowledgement.

use async_trait::async_trait;
use like_core::{DomainError, EventPublisher, LikeEvent, RepoResult};
use redis::streams::StreamMaxlen;
use redis::AsyncCommands;
use tracing::{debug, instrument, warn};

use crate::pool::{RedisPool, RedisResult};

/// Stream entry field carrying the encoded envelope
pub const EVENT_FIELD: &str = "event";

/// Publishes like events by appending them to a Redis stream
#[derive(Debug, Clone)]
pub struct StreamProducer {
    pool: RedisPool,
    max_len: Option<usize>,
}

impl StreamProducer {
    /// Create a producer that never trims the stream
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            max_len: None,
        }
    }

    /// Cap the stream at roughly `max_len` entries on every append
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Approximate trim threshold, if any
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Append one event to `topic` and return the stream entry id
    pub async fn append(&self, topic: &str, event: &LikeEvent) -> RedisResult<String> {
        let payload = event.encode()?;
        let fields = [(EVENT_FIELD, payload)];
        let mut conn = self.pool.get().await?;

        let entry_id: String = match self.max_len {
            Some(max_len) => {
                conn.xadd_maxlen(topic, StreamMaxlen::Approx(max_len), "*", &fields)
                    .await?
            }
            None => conn.xadd(topic, "*", &fields).await?,
        };

        Ok(entry_id)
    }
}

#[async_trait]
impl EventPublisher for StreamProducer {
    #[instrument(skip(self, event), fields(method = event.method))]
    async fn publish(&self, topic: &str, event: &LikeEvent) -> RepoResult<()> {
        match self.append(topic, event).await {
            Ok(entry_id) => {
                debug!(topic = %topic, entry_id = %entry_id, "Event appended to stream");
                Ok(())
            }
            Err(e) => {
                warn!(topic = %topic, error = %e, "Failed to append event to stream");
                Err(DomainError::PublishFailed(e.to_string()))
            }
        }
    }
}
