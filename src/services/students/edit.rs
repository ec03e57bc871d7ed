use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{STUDENTS_INDEX, StudentService};
use crate::models::{
    ApiResponse, ErrorCode, FieldError,
    students::{requests::StudentForm, responses::StudentFormViewModel},
};
use crate::services::{SAVE_CHANGES_ERROR, redirect_to};
use crate::utils::validate::validate_student_form;

pub async fn edit_student_form(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentFormViewModel {
                id: Some(student.id),
                student: StudentForm::from(&student),
                errors: Vec::new(),
            },
            "Edit student form",
        ))),
        Ok(None) => Ok(student_not_found()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student: {e}"),
            )),
        ),
    }
}

/// 只有姓、名和入学日期可以修改，ID 始终取自路径
pub async fn edit_student(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
    form: StudentForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(student_not_found()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    }

    let changes = match validate_student_form(&form) {
        Ok(changes) => changes,
        Err(errors) => return Ok(form_rejected(id, form, errors, ErrorCode::ValidationFailed)),
    };

    // 保存失败不重试，保留原因写日志，向用户展示统一提示
    match storage.update_student(id, changes).await {
        Ok(Some(_)) => {
            info!("Student {} updated successfully", id);
            Ok(redirect_to(STUDENTS_INDEX))
        }
        Ok(None) => {
            error!("Failed to update student {}: row disappeared before save", id);
            Ok(save_failed(id, form))
        }
        Err(e) => {
            error!("Failed to update student {}: {}", id, e);
            Ok(save_failed(id, form))
        }
    }
}

fn student_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::StudentNotFound,
        "Student not found",
    ))
}

fn save_failed(id: i64, form: StudentForm) -> HttpResponse {
    form_rejected(
        id,
        form,
        vec![FieldError::model(SAVE_CHANGES_ERROR)],
        ErrorCode::StudentSaveFailed,
    )
}

fn form_rejected(
    id: i64,
    form: StudentForm,
    errors: Vec<FieldError>,
    code: ErrorCode,
) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::error(
        code,
        StudentFormViewModel {
            id: Some(id),
            student: form,
            errors,
        },
        "Student was not updated",
    ))
}
