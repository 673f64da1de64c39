use serde::Serialize;

use super::entities::CourseWithTeacher;

// 课程列表响应（含授课教师姓名）
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<CourseWithTeacher>,
}
