use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::deserialize::empty_as_none_parsed;

// 字段级校验错误；field 为空字符串时表示整体（非字段）错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "form.ts")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 整体错误，不属于任何字段
    pub fn model(message: impl Into<String>) -> Self {
        Self::new("", message)
    }
}

// 下拉选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "form.ts")]
pub struct SelectOption {
    pub value: i64,
    pub text: String,
    pub selected: bool,
}

// 删除确认页查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmParams {
    #[serde(default, deserialize_with = "empty_as_none_parsed")]
    pub save_changes_error: Option<bool>,
}

impl DeleteConfirmParams {
    pub fn has_error(&self) -> bool {
        self.save_changes_error.unwrap_or(false)
    }
}
