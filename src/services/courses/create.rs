use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{COURSES_INDEX, CourseService, load_department_options};
use crate::models::{
    ApiResponse, ErrorCode, FieldError,
    courses::{requests::CourseForm, responses::CourseFormViewModel},
};
use crate::services::{SAVE_CHANGES_ERROR, redirect_to};
use crate::utils::validate::validate_course_form;

pub async fn create_course_form(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let departments = match load_department_options(&storage, None).await {
        Ok(options) => options,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseFormViewModel {
            id: None,
            course: CourseForm::default(),
            departments,
            errors: Vec::new(),
        },
        "Create course form",
    )))
}

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    form: CourseForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (errors, code) = match validate_course_form(&form) {
        Ok(changes) => match storage.create_course(changes).await {
            Ok(course) => {
                info!("Course {} created successfully", course.id);
                return Ok(redirect_to(COURSES_INDEX));
            }
            Err(e) => {
                error!("Failed to create course: {}", e);
                (
                    vec![FieldError::model(SAVE_CHANGES_ERROR)],
                    ErrorCode::CourseSaveFailed,
                )
            }
        },
        Err(errors) => (errors, ErrorCode::ValidationFailed),
    };

    // 回显表单时保留已选院系
    let departments = match load_department_options(&storage, form.selected_department()).await {
        Ok(options) => options,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error(
        code,
        CourseFormViewModel {
            id: None,
            course: form,
            departments,
            errors,
        },
        "Course was not created",
    )))
}
