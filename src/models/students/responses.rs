use serde::Serialize;

use super::entities::StudentWithCourse;

// 学生列表响应（含所选课程名称）
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<StudentWithCourse>,
}
