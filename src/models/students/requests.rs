use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::deserialize::{empty_as_none_parsed, empty_string_as_none};

/// 学生列表的排序方式
///
/// 只接受固定的几种排序，不会把请求中的字符串当作列名使用。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StudentSortOrder {
    #[default]
    NameAsc,
    NameDesc,
    DateAsc,
    DateDesc,
}

impl StudentSortOrder {
    pub const NAME_DESC: &'static str = "name_desc";
    pub const DATE: &'static str = "Date";
    pub const DATE_DESC: &'static str = "date_desc";

    /// 解析排序标记，无法识别时回退到按姓升序
    pub fn parse(token: Option<&str>) -> Self {
        match token.unwrap_or_default() {
            Self::NAME_DESC => StudentSortOrder::NameDesc,
            Self::DATE => StudentSortOrder::DateAsc,
            Self::DATE_DESC => StudentSortOrder::DateDesc,
            _ => StudentSortOrder::NameAsc,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            StudentSortOrder::NameAsc => "",
            StudentSortOrder::NameDesc => Self::NAME_DESC,
            StudentSortOrder::DateAsc => Self::DATE,
            StudentSortOrder::DateDesc => Self::DATE_DESC,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(
            self,
            StudentSortOrder::NameDesc | StudentSortOrder::DateDesc
        )
    }
}

// 学生列表查询参数（来自HTTP请求），空值与未提供等同
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIndexParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_order: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub current_filter: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search_string: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none_parsed")]
    pub page_number: Option<i64>,
}

impl StudentIndexParams {
    /// 本次生效的搜索词：有新搜索词时使用新词，否则沿用 currentFilter
    pub fn effective_filter(&self) -> Option<String> {
        self.new_search()
            .or(non_blank(self.current_filter.as_deref()))
            .map(str::to_string)
    }

    /// 本次生效的页码：有新搜索词时回到第 1 页
    pub fn effective_page(&self) -> Option<i64> {
        if self.new_search().is_some() {
            Some(1)
        } else {
            self.page_number
        }
    }

    fn new_search(&self) -> Option<&str> {
        non_blank(self.search_string.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub search: Option<String>,
    pub sort: StudentSortOrder,
    pub page: Option<i64>,
    pub page_size: u64,
}

// 学生表单，字段按原样绑定，校验失败时原样回显
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "student.ts")]
pub struct StudentForm {
    pub last_name: String,
    pub first_mid_name: String,
    pub enrollment_date: String,
}

// 校验通过后可写入的字段
#[derive(Debug, Clone, PartialEq)]
pub struct StudentChanges {
    pub last_name: String,
    pub first_mid_name: String,
    pub enrollment_date: NaiveDate,
}

impl From<&crate::models::students::entities::Student> for StudentForm {
    fn from(student: &crate::models::students::entities::Student) -> Self {
        Self {
            last_name: student.last_name.clone(),
            first_mid_name: student.first_mid_name.clone(),
            enrollment_date: student.enrollment_date.format("%Y-%m-%d").to_string(),
        }
    }
}
