pub mod courses;
pub mod students;

pub use courses::CourseService;
pub use students::StudentService;

use actix_web::{HttpResponse, http::header::LOCATION};

/// 保存失败时展示给用户的统一提示
pub const SAVE_CHANGES_ERROR: &str =
    "Unable to save changes. Try again, and if the problem persists, see your system administrator.";

/// 删除失败后确认页展示的提示
pub const DELETE_FAILED_ERROR: &str =
    "Delete failed. Try again, and if the problem persists see your system administrator.";

/// 303 重定向，POST 之后浏览器以 GET 访问目标
pub(crate) fn redirect_to(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location.as_ref()))
        .finish()
}
