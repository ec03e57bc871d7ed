use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, course_not_found};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course_details(
    service: &CourseService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_details(id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            course,
            "Course details retrieved successfully",
        ))),
        Ok(None) => Ok(course_not_found()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get course details: {e}"),
            )),
        ),
    }
}
