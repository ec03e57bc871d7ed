use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{COURSES_INDEX, CourseService, course_not_found};
use crate::models::{
    ApiResponse, ErrorCode, common::DeleteConfirmParams,
    courses::responses::CourseDeleteViewModel,
};
use crate::services::{DELETE_FAILED_ERROR, redirect_to};

pub async fn delete_course_confirm(
    service: &CourseService,
    request: &HttpRequest,
    id: i64,
    params: DeleteConfirmParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_details(id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseDeleteViewModel {
                course,
                error_message: params.has_error().then(|| DELETE_FAILED_ERROR.to_string()),
            },
            "Confirm course deletion",
        ))),
        Ok(None) => Ok(course_not_found()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get course: {e}"),
            )),
        ),
    }
}

/// 仍有选课记录的课程无法删除，此时带标记回到确认页
pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course(id).await {
        Ok(true) => {
            info!("Course {} deleted successfully", id);
            Ok(redirect_to(COURSES_INDEX))
        }
        Ok(false) => Ok(redirect_to(COURSES_INDEX)),
        Err(e) => {
            error!("Failed to delete course {}: {}", id, e);
            Ok(redirect_to(format!(
                "{COURSES_INDEX}/Delete/{id}?saveChangesError=true"
            )))
        }
    }
}
