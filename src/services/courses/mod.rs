pub mod create;
pub mod credits;
pub mod delete;
pub mod details;
pub mod edit;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::models::{
    ApiResponse, ErrorCode, SelectOption, common::DeleteConfirmParams,
    courses::{requests::CourseForm, responses::department_picklist},
};
use crate::storage::Storage;

/// 课程列表页路径
pub const COURSES_INDEX: &str = "/Courses";

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 课程列表
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_courses(self, request).await
    }

    // 课程详情
    pub async fn get_course_details(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        details::get_course_details(self, request, id).await
    }

    // 新建表单（附院系下拉列表）
    pub async fn create_course_form(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        create::create_course_form(self, request).await
    }

    pub async fn create_course(
        &self,
        request: &HttpRequest,
        form: CourseForm,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, form).await
    }

    // 编辑表单
    pub async fn edit_course_form(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        edit::edit_course_form(self, request, id).await
    }

    pub async fn edit_course(
        &self,
        request: &HttpRequest,
        id: i64,
        form: CourseForm,
    ) -> ActixResult<HttpResponse> {
        edit::edit_course(self, request, id, form).await
    }

    // 删除确认页
    pub async fn delete_course_confirm(
        &self,
        request: &HttpRequest,
        id: i64,
        params: DeleteConfirmParams,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course_confirm(self, request, id, params).await
    }

    pub async fn delete_course(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, id).await
    }

    // 批量调整学分
    pub async fn update_credits_form(&self) -> ActixResult<HttpResponse> {
        credits::update_credits_form().await
    }

    pub async fn update_credits(
        &self,
        request: &HttpRequest,
        multiplier: Option<String>,
    ) -> ActixResult<HttpResponse> {
        credits::update_credits(self, request, multiplier).await
    }
}

/// 读取院系下拉列表；失败时返回可直接响应的 500
pub(crate) async fn load_department_options(
    storage: &Arc<dyn Storage>,
    selected: Option<i64>,
) -> Result<Vec<SelectOption>, HttpResponse> {
    match storage.list_departments().await {
        Ok(departments) => Ok(department_picklist(departments, selected)),
        Err(e) => {
            error!("Failed to list departments: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::DepartmentListFailed,
                    format!("Failed to retrieve departments: {e}"),
                )),
            )
        }
    }
}

pub(crate) fn course_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::CourseNotFound,
        "Course not found",
    ))
}
