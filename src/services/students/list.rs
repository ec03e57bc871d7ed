use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{
        requests::{StudentIndexParams, StudentListQuery, StudentSortOrder},
        responses::StudentIndexViewModel,
    },
};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: StudentIndexParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_filter = params.effective_filter();
    let list_query = StudentListQuery {
        search: current_filter.clone(),
        sort: StudentSortOrder::parse(params.sort_order.as_deref()),
        page: params.effective_page(),
        page_size: AppConfig::get().pagination.page_size,
    };

    match storage.list_students_with_pagination(list_query).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentIndexViewModel::new(params.sort_order.as_deref(), current_filter, students),
            "Student list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list students: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve student list: {e}"),
                )),
            )
        }
    }
}
