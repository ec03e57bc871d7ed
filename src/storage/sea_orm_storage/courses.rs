//! 课程存储操作

use super::{SeaOrmStorage, save_error};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::prelude::Departments;
use crate::errors::{ContosoError, Result};
use crate::models::courses::{
    entities::{Course, CourseWithDepartment},
    requests::CourseChanges,
};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部课程及其院系
    pub async fn list_courses_impl(&self) -> Result<Vec<CourseWithDepartment>> {
        let rows = Courses::find()
            .find_also_related(Departments)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(course, department)| {
                Some(CourseWithDepartment {
                    course: course.into_course(),
                    department: department?.into_department(),
                })
            })
            .collect())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 获取课程及其院系
    pub async fn get_course_details_impl(&self, id: i64) -> Result<Option<CourseWithDepartment>> {
        let result = Courses::find_by_id(id)
            .find_also_related(Departments)
            .one(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.and_then(|(course, department)| {
            Some(CourseWithDepartment {
                course: course.into_course(),
                department: department?.into_department(),
            })
        }))
    }

    /// 创建课程，院系不存在时由外键约束拒绝
    pub async fn create_course_impl(&self, course: CourseChanges) -> Result<Course> {
        let model = ActiveModel {
            title: Set(course.title),
            credits: Set(course.credits),
            department_id: Set(course.department_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(save_error("创建课程失败"))?;

        Ok(result.into_course())
    }

    /// 更新课程信息，ID 不可修改
    pub async fn update_course_impl(
        &self,
        id: i64,
        changes: CourseChanges,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            title: Set(changes.title),
            credits: Set(changes.credits),
            department_id: Set(changes.department_id),
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(save_error("更新课程失败"))?;

        Ok(Some(updated.into_course()))
    }

    /// 删除课程，存在选课记录时由外键约束拒绝
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 单条 UPDATE 语句将所有课程学分乘以系数
    pub async fn multiply_course_credits_impl(&self, multiplier: i32) -> Result<u64> {
        let result = Courses::update_many()
            .col_expr(Column::Credits, Expr::col(Column::Credits).mul(multiplier))
            .exec(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("批量更新学分失败: {e}")))?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::requests::StudentChanges;
    use chrono::NaiveDate;

    fn course(title: &str, credits: i32, department_id: i64) -> CourseChanges {
        CourseChanges {
            title: title.to_string(),
            credits,
            department_id,
        }
    }

    #[tokio::test]
    async fn test_course_details_include_department() {
        let storage = SeaOrmStorage::in_memory().await;
        let dept = storage.create_department_impl("Engineering").await.unwrap();
        let created = storage
            .create_course_impl(course("Chemistry", 3, dept.id))
            .await
            .unwrap();

        let details = storage
            .get_course_details_impl(created.id)
            .await
            .unwrap()
            .expect("course should exist");
        assert_eq!(details.course.title, "Chemistry");
        assert_eq!(details.department.name, "Engineering");

        assert!(storage.get_course_details_impl(404).await.unwrap().is_none());

        let all = storage.list_courses_impl().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_create_course_with_unknown_department_fails() {
        let storage = SeaOrmStorage::in_memory().await;
        let result = storage.create_course_impl(course("Orphan", 2, 77)).await;
        assert!(result.is_err());
        assert!(storage.list_courses_impl().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_multiply_credits() {
        let storage = SeaOrmStorage::in_memory().await;
        let dept = storage.create_department_impl("Mathematics").await.unwrap();
        for (title, credits) in [("Calculus", 3), ("Trigonometry", 4), ("Geometry", 5)] {
            storage
                .create_course_impl(course(title, credits, dept.id))
                .await
                .unwrap();
        }

        let affected = storage.multiply_course_credits_impl(2).await.unwrap();
        assert_eq!(affected, 3);

        let credits: Vec<i32> = storage
            .list_courses_impl()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.course.credits)
            .collect();
        assert_eq!(credits, vec![6, 8, 10]);
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let storage = SeaOrmStorage::in_memory().await;
        let economics = storage.create_department_impl("Economics").await.unwrap();
        let english = storage.create_department_impl("English").await.unwrap();
        let created = storage
            .create_course_impl(course("Microeconomics", 3, economics.id))
            .await
            .unwrap();

        let updated = storage
            .update_course_impl(created.id, course("Literature", 4, english.id))
            .await
            .unwrap()
            .expect("course should exist");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Literature");
        assert_eq!(updated.department_id, english.id);

        assert!(
            storage
                .update_course_impl(999, course("Nothing", 1, english.id))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete_course_with_enrollments_is_rejected() {
        let storage = SeaOrmStorage::in_memory().await;
        let dept = storage.create_department_impl("English").await.unwrap();
        let composition = storage
            .create_course_impl(course("Composition", 3, dept.id))
            .await
            .unwrap();
        let poetry = storage
            .create_course_impl(course("Poetry", 2, dept.id))
            .await
            .unwrap();
        let student = storage
            .create_student_impl(StudentChanges {
                last_name: "Alexander".into(),
                first_mid_name: "Carson".into(),
                enrollment_date: NaiveDate::from_ymd_opt(2010, 9, 1).unwrap(),
            })
            .await
            .unwrap();
        storage
            .create_enrollment_impl(student.id, composition.id, None)
            .await
            .unwrap();

        assert!(storage.delete_course_impl(composition.id).await.is_err());
        assert!(storage.delete_course_impl(poetry.id).await.unwrap());
        assert!(!storage.delete_course_impl(poetry.id).await.unwrap());
    }
}
