pub mod extractor;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use extractor::SafeIdI64;
pub use parameter_error_handler::{form_error_handler, query_error_handler};
pub use sql::{LIKE_ESCAPE, contains_pattern, escape_like_pattern};
