use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode, FieldError, courses::responses::CourseCreditsViewModel,
};
use crate::utils::validate::validate_multiplier;

pub async fn update_credits_form() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseCreditsViewModel {
            rows_affected: None,
            errors: Vec::new(),
        },
        "Update course credits form",
    )))
}

/// 未提供系数时不做任何修改；系数不是正整数时拒绝
pub async fn update_credits(
    service: &CourseService,
    request: &HttpRequest,
    multiplier: Option<String>,
) -> ActixResult<HttpResponse> {
    let Some(raw) = multiplier else {
        return update_credits_form().await;
    };

    let multiplier = match validate_multiplier(&raw) {
        Ok(multiplier) => multiplier,
        Err(msg) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error(
                ErrorCode::CourseCreditsInvalid,
                CourseCreditsViewModel {
                    rows_affected: None,
                    errors: vec![FieldError::new("multiplier", msg)],
                },
                "Invalid credit multiplier",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.multiply_course_credits(multiplier).await {
        Ok(rows_affected) => {
            info!(
                "Course credits multiplied by {}, {} rows affected",
                multiplier, rows_affected
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CourseCreditsViewModel {
                    rows_affected: Some(rows_affected),
                    errors: Vec::new(),
                },
                "Course credits updated successfully",
            )))
        }
        Err(e) => {
            error!("Failed to multiply course credits by {}: {}", multiplier, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreditsUpdateFailed,
                    format!("Failed to update course credits: {e}"),
                )),
            )
        }
    }
}
