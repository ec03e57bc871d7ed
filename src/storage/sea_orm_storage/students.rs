//! 学生存储操作

use super::{SeaOrmStorage, save_error};
use crate::entity::prelude::{Courses, Enrollments};
use crate::entity::enrollments;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{ContosoError, Result};
use crate::models::{
    PaginatedList,
    common::pagination::{clamp_page_index, total_pages},
    enrollments::entities::EnrollmentWithCourse,
    students::{
        entities::Student,
        requests::{StudentChanges, StudentListQuery, StudentSortOrder},
        responses::StudentDetails,
    },
};
use crate::utils::{LIKE_ESCAPE, contains_pattern};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 分页列出学生
    ///
    /// 姓或名包含搜索词即匹配；同值按 ID 升序，保证多次查询顺序一致。
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedList<Student>> {
        let size = query.page_size.max(1);

        let mut select = Students::find();

        // 搜索条件，首尾空白不参与匹配
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let pattern = contains_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::LastName.like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)))
                    .add(Column::FirstMidName.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))),
            );
        }

        // 排序
        let (column, order) = match query.sort {
            StudentSortOrder::NameAsc => (Column::LastName, Order::Asc),
            StudentSortOrder::NameDesc => (Column::LastName, Order::Desc),
            StudentSortOrder::DateAsc => (Column::EnrollmentDate, Order::Asc),
            StudentSortOrder::DateDesc => (Column::EnrollmentDate, Order::Desc),
        };
        select = select.order_by(column, order).order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询学生总数失败: {e}")))?;

        let page = clamp_page_index(query.page, total_pages(total, size));

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(PaginatedList::new(
            students.into_iter().map(|m| m.into_student()).collect(),
            page,
            size,
            total,
        ))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 获取学生及其选课记录（含课程）
    pub async fn get_student_details_impl(&self, id: i64) -> Result<Option<StudentDetails>> {
        let Some(student) = self.get_student_by_id_impl(id).await? else {
            return Ok(None);
        };

        let rows = Enrollments::find()
            .filter(enrollments::Column::StudentId.eq(id))
            .find_also_related(Courses)
            .order_by_asc(enrollments::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询选课记录失败: {e}")))?;

        let enrollments = rows
            .into_iter()
            .filter_map(|(enrollment, course)| {
                let course = course?.into_course();
                let enrollment = enrollment.into_enrollment();
                Some(EnrollmentWithCourse {
                    id: enrollment.id,
                    grade: enrollment.grade,
                    course,
                })
            })
            .collect();

        Ok(Some(StudentDetails {
            student,
            enrollments,
        }))
    }

    /// 创建学生
    pub async fn create_student_impl(&self, student: StudentChanges) -> Result<Student> {
        let model = ActiveModel {
            last_name: Set(student.last_name),
            first_mid_name: Set(student.first_mid_name),
            enrollment_date: Set(student.enrollment_date),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(save_error("创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 更新学生信息，ID 不可修改
    pub async fn update_student_impl(
        &self,
        id: i64,
        changes: StudentChanges,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            last_name: Set(changes.last_name),
            first_mid_name: Set(changes.first_mid_name),
            enrollment_date: Set(changes.enrollment_date),
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(save_error("更新学生失败"))?;

        Ok(Some(updated.into_student()))
    }

    /// 删除学生，选课记录级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生总数
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| ContosoError::database_operation(format!("查询学生总数失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn changes(last: &str, first: &str, date: (i32, u32, u32)) -> StudentChanges {
        StudentChanges {
            last_name: last.to_string(),
            first_mid_name: first.to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn query(search: Option<&str>, sort: StudentSortOrder, page: Option<i64>) -> StudentListQuery {
        StudentListQuery {
            search: search.map(str::to_string),
            sort,
            page,
            page_size: 3,
        }
    }

    async fn seeded() -> SeaOrmStorage {
        let storage = SeaOrmStorage::in_memory().await;
        for (last, first, date) in [
            ("Alexander", "Carson", (2010, 9, 1)),
            ("Alonso", "Meredith", (2012, 9, 1)),
            ("Anand", "Arturo", (2013, 9, 1)),
            ("Barzdukas", "Gytis", (2012, 9, 1)),
            ("Li", "Yan", (2012, 9, 1)),
            ("Justice", "Peggy", (2011, 9, 1)),
            ("Norman", "Laura", (2013, 9, 1)),
        ] {
            storage
                .create_student_impl(changes(last, first, date))
                .await
                .unwrap();
        }
        storage
    }

    fn last_names(page: &PaginatedList<Student>) -> Vec<&str> {
        page.items.iter().map(|s| s.last_name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_default_sort_and_first_page() {
        let storage = seeded().await;
        let page = storage
            .list_students_with_pagination_impl(query(None, StudentSortOrder::NameAsc, None))
            .await
            .unwrap();

        assert_eq!(page.total_items, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page_index, 1);
        assert_eq!(last_names(&page), vec!["Alexander", "Alonso", "Anand"]);
        assert!(!page.has_previous_page);
        assert!(page.has_next_page);
    }

    #[tokio::test]
    async fn test_page_clamping() {
        let storage = seeded().await;

        let page = storage
            .list_students_with_pagination_impl(query(None, StudentSortOrder::NameAsc, Some(0)))
            .await
            .unwrap();
        assert_eq!(page.page_index, 1);

        let page = storage
            .list_students_with_pagination_impl(query(None, StudentSortOrder::NameAsc, Some(42)))
            .await
            .unwrap();
        assert_eq!(page.page_index, 3);
        assert_eq!(last_names(&page), vec!["Norman"]);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[tokio::test]
    async fn test_descending_sorts() {
        let storage = seeded().await;

        let page = storage
            .list_students_with_pagination_impl(query(None, StudentSortOrder::NameDesc, None))
            .await
            .unwrap();
        assert_eq!(last_names(&page), vec!["Norman", "Li", "Justice"]);

        let page = storage
            .list_students_with_pagination_impl(query(None, StudentSortOrder::DateDesc, None))
            .await
            .unwrap();
        // 同一天入学时按 ID 升序
        assert_eq!(last_names(&page), vec!["Anand", "Norman", "Alonso"]);
    }

    #[tokio::test]
    async fn test_date_sort_ties_are_deterministic() {
        let storage = seeded().await;
        let q = query(None, StudentSortOrder::DateAsc, Some(2));

        let first = storage
            .list_students_with_pagination_impl(q.clone())
            .await
            .unwrap();
        let second = storage.list_students_with_pagination_impl(q).await.unwrap();

        assert_eq!(last_names(&first), vec!["Alonso", "Barzdukas", "Li"]);
        assert_eq!(last_names(&first), last_names(&second));
    }

    #[tokio::test]
    async fn test_search_matches_last_or_first_name() {
        let storage = seeded().await;
        let page = storage
            .list_students_with_pagination_impl(query(Some("an"), StudentSortOrder::NameAsc, None))
            .await
            .unwrap();

        // Li 通过名 Yan 匹配
        assert_eq!(page.total_items, 4);
        assert_eq!(last_names(&page), vec!["Alexander", "Anand", "Li"]);

        let page = storage
            .list_students_with_pagination_impl(query(Some("Gytis"), StudentSortOrder::NameAsc, None))
            .await
            .unwrap();
        assert_eq!(last_names(&page), vec!["Barzdukas"]);
    }

    #[tokio::test]
    async fn test_search_text_is_trimmed() {
        let storage = seeded().await;
        let page = storage
            .list_students_with_pagination_impl(query(Some("  an "), StudentSortOrder::NameAsc, None))
            .await
            .unwrap();
        assert_eq!(page.total_items, 4);
        assert_eq!(last_names(&page), vec!["Alexander", "Anand", "Li"]);
    }

    #[tokio::test]
    async fn test_blank_search_is_noop_and_wildcards_are_literal() {
        let storage = seeded().await;
        let page = storage
            .list_students_with_pagination_impl(query(Some("   "), StudentSortOrder::NameAsc, None))
            .await
            .unwrap();
        assert_eq!(page.total_items, 7);

        let page = storage
            .list_students_with_pagination_impl(query(Some("%"), StudentSortOrder::NameAsc, None))
            .await
            .unwrap();
        assert_eq!(page.total_items, 0);
        assert_eq!(page.page_index, 1);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let storage = seeded().await;
        let student = storage
            .create_student_impl(changes("Olivetto", "Nino", (2005, 9, 1)))
            .await
            .unwrap();

        let updated = storage
            .update_student_impl(student.id, changes("Olivetto", "Nina", (2006, 9, 1)))
            .await
            .unwrap()
            .expect("student should exist");
        assert_eq!(updated.id, student.id);
        assert_eq!(updated.first_mid_name, "Nina");

        assert!(
            storage
                .update_student_impl(9999, changes("X", "Y", (2006, 9, 1)))
                .await
                .unwrap()
                .is_none()
        );

        assert!(storage.delete_student_impl(student.id).await.unwrap());
        assert!(!storage.delete_student_impl(student.id).await.unwrap());
        assert_eq!(storage.count_students_impl().await.unwrap(), 7);
    }
}
