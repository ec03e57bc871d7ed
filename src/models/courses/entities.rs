use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::departments::entities::Department;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub title: String,
    // 学分
    pub credits: i32,
    // 所属院系ID
    pub department_id: i64,
}

// 课程及其所属院系
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseWithDepartment {
    #[serde(flatten)]
    #[ts(flatten)]
    pub course: Course,
    pub department: Department,
}
