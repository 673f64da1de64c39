use serde::{Deserialize, Serialize};

// 第一代扁平学生记录
//
// 课程只是一段自由文本，不关联课程表，也不校验是否真实存在。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyStudent {
    // 学生ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 邮箱
    pub email: String,
    // 课程名（自由文本）
    pub course: String,
}
