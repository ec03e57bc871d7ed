use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{COURSES_INDEX, CourseService, course_not_found, load_department_options};
use crate::models::{
    ApiResponse, ErrorCode, FieldError,
    courses::{requests::CourseForm, responses::CourseFormViewModel},
};
use crate::services::{SAVE_CHANGES_ERROR, redirect_to};
use crate::utils::validate::validate_course_form;

pub async fn edit_course_form(
    service: &CourseService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(id).await {
        Ok(Some(course)) => course,
        Ok(None) => return Ok(course_not_found()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    };

    let departments = match load_department_options(&storage, Some(course.department_id)).await {
        Ok(options) => options,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseFormViewModel {
            id: Some(course.id),
            course: CourseForm::from(&course),
            departments,
            errors: Vec::new(),
        },
        "Edit course form",
    )))
}

/// 只有标题、学分和院系可以修改，ID 始终取自路径
pub async fn edit_course(
    service: &CourseService,
    request: &HttpRequest,
    id: i64,
    form: CourseForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(course_not_found()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course: {e}"),
                )),
            );
        }
    }

    let (errors, code) = match validate_course_form(&form) {
        Ok(changes) => match storage.update_course(id, changes).await {
            Ok(Some(_)) => {
                info!("Course {} updated successfully", id);
                return Ok(redirect_to(COURSES_INDEX));
            }
            Ok(None) => {
                error!("Failed to update course {}: row disappeared before save", id);
                (
                    vec![FieldError::model(SAVE_CHANGES_ERROR)],
                    ErrorCode::CourseSaveFailed,
                )
            }
            Err(e) => {
                error!("Failed to update course {}: {}", id, e);
                (
                    vec![FieldError::model(SAVE_CHANGES_ERROR)],
                    ErrorCode::CourseSaveFailed,
                )
            }
        },
        Err(errors) => (errors, ErrorCode::ValidationFailed),
    };

    let departments = match load_department_options(&storage, form.selected_department()).await {
        Ok(options) => options,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error(
        code,
        CourseFormViewModel {
            id: Some(id),
            course: form,
            departments,
            errors,
        },
        "Course was not updated",
    )))
}
