//! 业务错误码
//!
//! 响应信封中的 `code` 字段。0 为成功，1xxx 为通用错误，
//! 2xxx/3xxx/4xxx 分别对应教师/课程/学生领域，5xxx 为第一代学生表。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1001,
    ValidationFailed = 1002,
    InternalServerError = 1003,

    // 教师
    TeacherNotFound = 2001,
    TeacherAlreadyExists = 2002,
    TeacherCreationFailed = 2003,
    TeacherUpdateFailed = 2004,
    TeacherDeleteFailed = 2005,
    TeacherHasCourses = 2006,

    // 课程
    CourseNotFound = 3001,
    CourseCreationFailed = 3002,
    CourseUpdateFailed = 3003,
    CourseDeleteFailed = 3004,
    CourseHasStudents = 3005,

    // 学生
    StudentNotFound = 4001,
    StudentAlreadyExists = 4002,
    StudentCreationFailed = 4003,
    StudentUpdateFailed = 4004,
    StudentDeleteFailed = 4005,

    // 第一代学生表（直接访问）
    LegacyStudentNotFound = 5001,
    LegacyStudentCreationFailed = 5002,
    LegacyStudentUpdateFailed = 5003,
    LegacyStudentDeleteFailed = 5004,
    LegacySeedFailed = 5005,
}
