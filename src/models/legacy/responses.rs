use serde::Serialize;

use super::entities::LegacyStudent;

// 扁平学生列表响应
#[derive(Debug, Serialize)]
pub struct LegacyStudentListResponse {
    pub items: Vec<LegacyStudent>,
}

// 样例数据写入结果
#[derive(Debug, Serialize)]
pub struct SampleSeedResponse {
    pub inserted: u64,
}
