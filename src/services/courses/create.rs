use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_course_name;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    // 验证课程名称
    if let Err(msg) = validate_course_name(&course_data.name) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} created successfully", course.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course added successfully!")))
        }
        Err(e) => Ok(handle_course_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_course_create_error(e: &str) -> HttpResponse {
    let msg = format!("Course creation failed: {e}");
    error!("{}", msg);
    if msg.contains("FOREIGN KEY constraint failed") {
        HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher does not exist",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::CourseCreationFailed,
            msg,
        ))
    }
}
