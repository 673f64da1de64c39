use serde::Serialize;

use super::entities::Teacher;
use crate::models::courses::entities::Course;

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub items: Vec<Teacher>,
}

// 教师连同首门课程的创建结果
#[derive(Debug, Serialize)]
pub struct TeacherWithCourseResponse {
    pub teacher: Teacher,
    pub course: Course,
}
