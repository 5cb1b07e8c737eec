//! Events published to downstream consumers

mod like_event;

pub use like_event::{CodecError, LikeActionRecord, LikeEvent, RequestMethod};
