use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{STUDENTS_INDEX, StudentService};
use crate::models::{
    ApiResponse, ErrorCode, common::DeleteConfirmParams,
    students::responses::StudentDeleteViewModel,
};
use crate::services::{DELETE_FAILED_ERROR, redirect_to};

pub async fn delete_student_confirm(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
    params: DeleteConfirmParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentDeleteViewModel {
                student,
                error_message: params.has_error().then(|| DELETE_FAILED_ERROR.to_string()),
            },
            "Confirm student deletion",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student: {e}"),
            )),
        ),
    }
}

/// 已被删除的学生视为删除成功；存储层失败时带标记回到确认页
pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(id).await {
        Ok(true) => {
            info!("Student {} deleted successfully", id);
            Ok(redirect_to(STUDENTS_INDEX))
        }
        Ok(false) => Ok(redirect_to(STUDENTS_INDEX)),
        Err(e) => {
            error!("Failed to delete student {}: {}", id, e);
            Ok(redirect_to(format!(
                "{STUDENTS_INDEX}/Delete/{id}?saveChangesError=true"
            )))
        }
    }
}
