//! 数据模型定义
//!
//! - `entities`: 业务实体
//! - `requests`: 请求参数与表单
//! - `responses`: 各动作返回的视图模型

pub mod common;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod students;

pub use common::{ApiResponse, ErrorCode, FieldError, PaginatedList, SelectOption};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
