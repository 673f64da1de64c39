use serde::Deserialize;

// 创建教师请求
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
}

// 更新教师请求（覆盖全部可编辑字段）
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub name: String,
    pub email: String,
}

// 同时创建教师与其第一门课程的请求
//
// 对应"新教师入职即开课"的表单：两步写入在同一事务中提交，
// 任何一步失败都不会留下半套数据。
#[derive(Debug, Deserialize)]
pub struct CreateTeacherWithCourseRequest {
    pub teacher_name: String,
    pub teacher_email: String,
    pub course_name: String,
    pub course_description: Option<String>,
}

// 教师列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherListQuery {
    pub search: Option<String>,
    pub limit: Option<u64>,
}
