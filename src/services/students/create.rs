use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{STUDENTS_INDEX, StudentService};
use crate::models::{
    ApiResponse, ErrorCode, FieldError,
    students::{requests::StudentForm, responses::StudentFormViewModel},
};
use crate::services::{SAVE_CHANGES_ERROR, redirect_to};
use crate::utils::validate::validate_student_form;

pub async fn create_student_form() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentFormViewModel {
            id: None,
            student: StudentForm::default(),
            errors: Vec::new(),
        },
        "Create student form",
    )))
}

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    form: StudentForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 表单校验
    let changes = match validate_student_form(&form) {
        Ok(changes) => changes,
        Err(errors) => return Ok(form_rejected(form, errors, ErrorCode::ValidationFailed)),
    };

    match storage.create_student(changes).await {
        Ok(student) => {
            info!("Student {} created successfully", student.id);
            Ok(redirect_to(STUDENTS_INDEX))
        }
        Err(e) => {
            error!("Failed to create student: {}", e);
            Ok(form_rejected(
                form,
                vec![FieldError::model(SAVE_CHANGES_ERROR)],
                ErrorCode::StudentSaveFailed,
            ))
        }
    }
}

/// 原样回显表单及错误
fn form_rejected(form: StudentForm, errors: Vec<FieldError>, code: ErrorCode) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::error(
        code,
        StudentFormViewModel {
            id: None,
            student: form,
            errors,
        },
        "Student was not created",
    ))
}
