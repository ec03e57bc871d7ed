//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_contoso_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ContosoError {
            $($variant(String),)*
        }

        impl ContosoError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ContosoError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ContosoError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ContosoError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ContosoError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ContosoError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_contoso_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UpdateConflict("E004", "Update Conflict"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
}

impl ContosoError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为保存冲突（目标行在读取与写入之间消失或被修改）
    pub fn is_update_conflict(&self) -> bool {
        matches!(self, ContosoError::UpdateConflict(_))
    }
}

impl fmt::Display for ContosoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ContosoError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ContosoError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotUpdated => {
                ContosoError::UpdateConflict("record was not updated".to_string())
            }
            other => ContosoError::DatabaseOperation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ContosoError {
    fn from(err: std::io::Error) -> Self {
        ContosoError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for ContosoError {
    fn from(err: serde_json::Error) -> Self {
        ContosoError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ContosoError {
    fn from(err: chrono::ParseError) -> Self {
        ContosoError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContosoError>;
