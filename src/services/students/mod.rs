pub mod create;
pub mod delete;
pub mod details;
pub mod edit;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    common::DeleteConfirmParams,
    students::requests::{StudentForm, StudentIndexParams},
};
use crate::storage::Storage;

/// 学生列表页路径
pub const STUDENTS_INDEX: &str = "/Students";

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 学生列表（搜索、排序、分页）
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        params: StudentIndexParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, params).await
    }

    // 学生详情
    pub async fn get_student_details(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        details::get_student_details(self, request, id).await
    }

    // 新建表单
    pub async fn create_student_form(&self) -> ActixResult<HttpResponse> {
        create::create_student_form().await
    }

    pub async fn create_student(
        &self,
        request: &HttpRequest,
        form: StudentForm,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, form).await
    }

    // 编辑表单
    pub async fn edit_student_form(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        edit::edit_student_form(self, request, id).await
    }

    pub async fn edit_student(
        &self,
        request: &HttpRequest,
        id: i64,
        form: StudentForm,
    ) -> ActixResult<HttpResponse> {
        edit::edit_student(self, request, id, form).await
    }

    // 删除确认页
    pub async fn delete_student_confirm(
        &self,
        request: &HttpRequest,
        id: i64,
        params: DeleteConfirmParams,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student_confirm(self, request, id, params).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, id).await
    }
}
