use serde::Deserialize;

// 注册学生请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub course_id: i64,
}

// 更新学生请求（覆盖全部可编辑字段）
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub email: String,
    pub course_id: i64,
}

// 学生列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentListQuery {
    pub search: Option<String>,
    pub limit: Option<u64>,
}
