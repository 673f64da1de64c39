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
macro_rules! define_rostersystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RosterSystemError {
            $($variant(String),)*
        }

        impl RosterSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RosterSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RosterSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RosterSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RosterSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RosterSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_rostersystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    Serialization("E005", "Serialization Error"),
}

impl RosterSystemError {
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
}

impl fmt::Display for RosterSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RosterSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for RosterSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        RosterSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for RosterSystemError {
    fn from(err: serde_json::Error) -> Self {
        RosterSystemError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterSystemError::database_config("test").code(), "E001");
        assert_eq!(
            RosterSystemError::database_connection("test").code(),
            "E002"
        );
        assert_eq!(
            RosterSystemError::database_operation("test").code(),
            "E003"
        );
        assert_eq!(RosterSystemError::validation("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RosterSystemError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            RosterSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = RosterSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = RosterSystemError::database_config("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Database Configuration Error"));
        assert!(formatted.contains("Invalid URL"));
    }

    #[test]
    fn test_from_db_err() {
        let err: RosterSystemError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }
}
