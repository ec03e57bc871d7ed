use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 姓
    pub last_name: String,
    // 名（含中间名）
    pub first_mid_name: String,
    // 入学日期
    pub enrollment_date: NaiveDate,
}
