//! Event producers.

mod stream_producer;

pub use stream_producer::{StreamProducer, EVENT_FIELD};
