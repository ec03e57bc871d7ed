use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::{
    common::DeleteConfirmParams,
    courses::requests::{CourseForm, CreditMultiplierParams},
};
use crate::services::CourseService;
use crate::utils::SafeIdI64;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn get_course_details(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course_details(&req, id.0).await
}

pub async fn create_course_form(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course_form(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    form: web::Form<CourseForm>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(&req, form.into_inner()).await
}

pub async fn edit_course_form(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.edit_course_form(&req, id.0).await
}

pub async fn edit_course(
    req: HttpRequest,
    id: SafeIdI64,
    form: web::Form<CourseForm>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .edit_course(&req, id.0, form.into_inner())
        .await
}

pub async fn delete_course_confirm(
    req: HttpRequest,
    id: SafeIdI64,
    query: web::Query<DeleteConfirmParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .delete_course_confirm(&req, id.0, query.into_inner())
        .await
}

pub async fn delete_course(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, id.0).await
}

pub async fn update_credits_form() -> ActixResult<HttpResponse> {
    COURSE_SERVICE.update_credits_form().await
}

// 系数可以来自表单，也可以来自查询字符串，表单中非空时优先
pub async fn update_credits(
    req: HttpRequest,
    query: web::Query<CreditMultiplierParams>,
    form: Option<web::Form<CreditMultiplierParams>>,
) -> ActixResult<HttpResponse> {
    let multiplier = form
        .and_then(|f| f.into_inner().multiplier)
        .or(query.into_inner().multiplier);
    COURSE_SERVICE.update_credits(&req, multiplier).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/Courses")
            .service(web::resource("").route(web::get().to(list_courses)))
            .service(web::resource("/Index").route(web::get().to(list_courses)))
            .service(web::resource("/Details/{id}").route(web::get().to(get_course_details)))
            .service(
                web::resource("/Create")
                    .route(web::get().to(create_course_form))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/Edit/{id}")
                    .route(web::get().to(edit_course_form))
                    .route(web::post().to(edit_course)),
            )
            .service(
                web::resource("/Delete/{id}")
                    .route(web::get().to(delete_course_confirm))
                    .route(web::post().to(delete_course)),
            )
            .service(
                web::resource("/UpdateCourseCredits")
                    .route(web::get().to(update_credits_form))
                    .route(web::post().to(update_credits)),
            ),
    );
}
