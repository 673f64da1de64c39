use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LegacyStudentService;
use crate::models::legacy::requests::UpdateLegacyStudentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_student(
    service: &LegacyStudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateLegacyStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student updated successfully!",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LegacyStudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            let msg = format!("Legacy student update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::LegacyStudentUpdateFailed,
                msg,
            )))
        }
    }
}
