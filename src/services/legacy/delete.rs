use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LegacyStudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &LegacyStudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully!")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LegacyStudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::LegacyStudentDeleteFailed,
                format!("Student deletion failed: {e}"),
            )),
        ),
    }
}
