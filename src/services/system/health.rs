use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

pub async fn get_health(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    // 启动时间由 main 在 app_data 中注入
    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or(0);

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Health retrieved successfully",
    )))
}
