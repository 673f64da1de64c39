use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 课程描述
    pub description: Option<String>,
    // 授课教师ID
    pub teacher_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课程及其授课教师姓名（列表联查结果）
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithTeacher {
    #[serde(flatten)]
    pub course: Course,
    // 教师被限制删除，正常数据下总是 Some；联查失配时为 None
    pub teacher_name: Option<String>,
}
