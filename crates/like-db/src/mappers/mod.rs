//! Model to entity mappers
//!
//! Rows are validated on the way out: identifiers must pass the same checks
//! as request input, so every conversion is a `TryFrom`.

mod like_action;
mod user;
