use std::sync::Arc;

use crate::models::{
    PaginatedList,
    courses::{
        entities::{Course, CourseWithDepartment},
        requests::CourseChanges,
    },
    departments::entities::Department,
    enrollments::entities::{Enrollment, Grade},
    students::{
        entities::Student,
        requests::{StudentChanges, StudentListQuery},
        responses::StudentDetails,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 按搜索、排序和页码列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedList<Student>>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 获取学生及其选课和课程
    async fn get_student_details(&self, id: i64) -> Result<Option<StudentDetails>>;
    // 创建学生
    async fn create_student(&self, student: StudentChanges) -> Result<Student>;
    // 更新学生，只写入白名单字段
    async fn update_student(&self, id: i64, changes: StudentChanges) -> Result<Option<Student>>;
    // 删除学生，记录不存在时返回 false
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 学生总数
    async fn count_students(&self) -> Result<u64>;

    /// 课程管理方法
    // 列出课程及其院系
    async fn list_courses(&self) -> Result<Vec<CourseWithDepartment>>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 获取课程及其院系
    async fn get_course_details(&self, id: i64) -> Result<Option<CourseWithDepartment>>;
    // 创建课程
    async fn create_course(&self, course: CourseChanges) -> Result<Course>;
    // 更新课程，只写入白名单字段
    async fn update_course(&self, id: i64, changes: CourseChanges) -> Result<Option<Course>>;
    // 删除课程，记录不存在时返回 false
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 所有课程学分乘以系数，返回受影响行数
    async fn multiply_course_credits(&self, multiplier: i32) -> Result<u64>;

    /// 院系管理方法
    // 按名称排序列出院系
    async fn list_departments(&self) -> Result<Vec<Department>>;
    // 创建院系
    async fn create_department(&self, name: &str) -> Result<Department>;

    /// 选课管理方法
    // 创建选课记录
    async fn create_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        grade: Option<Grade>,
    ) -> Result<Enrollment>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}

/// 测试用的内存 SQLite 存储（已执行迁移）
#[cfg(test)]
pub(crate) async fn create_test_storage() -> Arc<dyn Storage> {
    Arc::new(sea_orm_storage::SeaOrmStorage::in_memory().await)
}
