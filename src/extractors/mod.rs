//! Request extractors that turn raw path and body input into validated types.

mod payload;
mod record_id;
pub use payload::RecordPayload;
pub use record_id::RecordId;
