use serde::Deserialize;

// 登记扁平学生请求
#[derive(Debug, Deserialize)]
pub struct CreateLegacyStudentRequest {
    pub name: String,
    pub email: String,
    pub course: String,
}

// 更新扁平学生请求（覆盖全部字段）
#[derive(Debug, Deserialize)]
pub struct UpdateLegacyStudentRequest {
    pub name: String,
    pub email: String,
    pub course: String,
}
