pub mod deserialize;
pub mod error_code;
pub mod form;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use form::{DeleteConfirmParams, FieldError, SelectOption};
pub use pagination::PaginatedList;
pub use response::ApiResponse;
