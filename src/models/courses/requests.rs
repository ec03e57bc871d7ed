use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Course;
use crate::models::common::deserialize::empty_string_as_none;

// 课程表单，字段按原样绑定，校验失败时原样回显
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "course.ts")]
pub struct CourseForm {
    pub title: String,
    pub credits: String,
    pub department_id: String,
}

impl From<&Course> for CourseForm {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            credits: course.credits.to_string(),
            department_id: course.department_id.to_string(),
        }
    }
}

impl CourseForm {
    /// 表单中已选的院系，无法解析时为空
    pub fn selected_department(&self) -> Option<i64> {
        self.department_id.trim().parse().ok()
    }
}

// 校验通过后可写入的字段
#[derive(Debug, Clone, PartialEq)]
pub struct CourseChanges {
    pub title: String,
    pub credits: i32,
    pub department_id: i64,
}

// 批量调整学分参数，原样绑定后由服务层校验，空值视为未提供
#[derive(Debug, Default, Deserialize)]
pub struct CreditMultiplierParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub multiplier: Option<String>,
}
