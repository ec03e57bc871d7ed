/// 组装测试用的 actix 应用：注入存储与参数错误处理器
#[cfg(test)]
macro_rules! init_test_app {
    ($storage:expr, $configure:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($storage.clone()))
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(crate::utils::query_error_handler),
                )
                .app_data(
                    actix_web::web::FormConfig::default()
                        .error_handler(crate::utils::form_error_handler),
                )
                .configure($configure),
        )
        .await
    };
}

pub mod courses;

pub mod students;

pub use courses::configure_courses_routes;
pub use students::configure_students_routes;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

/// 未匹配任何路由时的统一 404
pub async fn not_found() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        "Resource not found",
    )))
}
