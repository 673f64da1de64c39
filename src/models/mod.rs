//! 数据模型定义
//!
//! 按领域划分：teachers / courses / students 为第二代映射模型，
//! legacy 为第一代扁平学生模型，common 为统一响应信封与错误码。

pub mod common;
pub mod courses;
pub mod legacy;
pub mod students;
pub mod system;
pub mod teachers;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 应用启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
