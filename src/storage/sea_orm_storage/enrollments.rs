//! 选课存储操作

use super::{SeaOrmStorage, save_error};
use crate::entity::enrollments::ActiveModel;
use crate::errors::Result;
use crate::models::enrollments::entities::{Enrollment, Grade};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建选课记录
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        course_id: i64,
        grade: Option<Grade>,
    ) -> Result<Enrollment> {
        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            grade: Set(grade.map(|g| g.to_string())),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(save_error("创建选课记录失败"))?;

        Ok(result.into_enrollment())
    }
}
