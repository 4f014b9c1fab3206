mod feedgate_error;
mod schema_error;

pub use feedgate_error::{FeedgateError, FeedgateResult};
pub use schema_error::{SchemaError, Violation, Violations};
