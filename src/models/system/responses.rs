use serde::Serialize;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,          // 服务状态
    pub version: String,         // 版本号
    pub environment: String,     // 运行环境
    pub uptime_seconds: i64,     // 启动以来的秒数
}
