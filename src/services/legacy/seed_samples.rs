use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LegacyStudentService;
use crate::models::legacy::responses::SampleSeedResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 对应原 `/add` 路由：批量写入三行示例学生
pub async fn seed_samples(
    service: &LegacyStudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.insert_sample_students().await {
        Ok(inserted) => {
            info!("{} sample students added", inserted);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SampleSeedResponse { inserted },
                "Sample students added!",
            )))
        }
        Err(e) => {
            let msg = format!("Sample seeding failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::LegacySeedFailed, msg)))
        }
    }
}
