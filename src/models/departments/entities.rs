use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "department.ts")]
pub struct Department {
    // 院系ID
    pub id: i64,
    // 院系名称
    pub name: String,
}
