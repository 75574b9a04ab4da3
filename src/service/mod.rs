//! RecordService: record CRUD on top of the store, plus request validation.

mod records;
mod validation;
pub use records::RecordService;
pub use validation::{parse_id, Pagination, RecordValidator};
