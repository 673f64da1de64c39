use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::{
    requests::CreateTeacherWithCourseRequest, responses::TeacherWithCourseResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_course_name, validate_email, validate_name};

/// 对应原 `/add-teacher` 表单：教师与首门课程一起写入
pub async fn create_teacher_with_course(
    service: &TeacherService,
    request: &HttpRequest,
    data: CreateTeacherWithCourseRequest,
) -> ActixResult<HttpResponse> {
    // 验证教师字段
    if let Err(msg) = validate_name(&data.teacher_name) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_email(&data.teacher_email) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 验证课程字段
    if let Err(msg) = validate_course_name(&data.course_name) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_teacher_with_course(data).await {
        Ok((teacher, course)) => {
            info!(
                "Teacher {} and course {} created successfully",
                teacher.name, course.name
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherWithCourseResponse { teacher, course },
                "Teacher and Course added successfully!",
            )))
        }
        Err(e) => {
            let msg = format!("Teacher and course creation failed: {e}");
            error!("{}", msg);
            // 任一步失败整个事务回滚，这里只需区分邮箱冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::TeacherAlreadyExists,
                    "Teacher email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TeacherCreationFailed,
                    msg,
                )))
            }
        }
    }
}
