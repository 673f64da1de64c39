use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_name};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    // 验证姓名
    if let Err(msg) = validate_name(&student_data.name) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created successfully", student.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student added successfully!")))
        }
        Err(e) => Ok(handle_student_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_student_create_error(e: &str) -> HttpResponse {
    let msg = format!("Student creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentAlreadyExists,
            "Student email already exists",
        ))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        // 外键约束已开启：引用不存在的课程直接拒绝
        HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course does not exist",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::StudentCreationFailed,
            msg,
        ))
    }
}
