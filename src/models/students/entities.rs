use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 邮箱（唯一）
    pub email: String,
    // 所选课程ID
    pub course_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生及其所选课程名称（列表联查结果）
#[derive(Debug, Clone, Serialize)]
pub struct StudentWithCourse {
    #[serde(flatten)]
    pub student: Student,
    // 课程被限制删除，正常数据下总是 Some；联查失配时为 None
    pub course_name: Option<String>,
}
