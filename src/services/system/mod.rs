pub mod health;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 健康检查：版本、环境与运行时长
    pub async fn get_health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        health::get_health(self, request).await
    }
}
