use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: i64,
}

// 更新课程请求（覆盖全部可编辑字段）
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: i64,
}

// 课程列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    pub search: Option<String>,
    pub limit: Option<u64>,
}
