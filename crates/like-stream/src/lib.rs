//! # like-stream
//!
//! Event channel for like transitions, backed by Redis Streams.
//!
//! - [`RedisPool`]: deadpool-managed connections with a `PING` health check
//! - [`StreamProducer`]: the [`like_core::EventPublisher`] that `XADD`s each event

pub mod pool;
pub mod producer;

pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use producer::{StreamProducer, EVENT_FIELD};
