use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LegacyStudentService;
use crate::models::legacy::requests::CreateLegacyStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_student(
    service: &LegacyStudentService,
    request: &HttpRequest,
    student_data: CreateLegacyStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 第一代表没有唯一约束，必填检查由请求结构完成
    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Legacy student {} created successfully", student.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student added successfully!")))
        }
        Err(e) => {
            let msg = format!("Legacy student creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::LegacyStudentCreationFailed,
                msg,
            )))
        }
    }
}
