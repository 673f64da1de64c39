use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_name};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    // 验证姓名
    if let Err(msg) = validate_name(&teacher_data.name) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&teacher_data.email) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            info!("Teacher {} created successfully", teacher.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Teacher added successfully!")))
        }
        Err(e) => Ok(handle_teacher_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_teacher_create_error(e: &str) -> HttpResponse {
    let msg = format!("Teacher creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TeacherAlreadyExists,
            "Teacher email already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::TeacherCreationFailed,
            msg,
        ))
    }
}
