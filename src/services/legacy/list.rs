use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LegacyStudentService;
use crate::models::legacy::responses::LegacyStudentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_students(
    service: &LegacyStudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LegacyStudentListResponse { items },
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
