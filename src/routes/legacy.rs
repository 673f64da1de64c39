use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::legacy::requests::{CreateLegacyStudentRequest, UpdateLegacyStudentRequest};
use crate::services::LegacyStudentService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 LEGACY_SERVICE 实例
static LEGACY_SERVICE: Lazy<LegacyStudentService> = Lazy::new(LegacyStudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEGACY_SERVICE.list_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateLegacyStudentRequest>,
) -> ActixResult<HttpResponse> {
    LEGACY_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn seed_samples(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEGACY_SERVICE.seed_samples(&req).await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    LEGACY_SERVICE.get_student(&req, student_id.0).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    update_data: web::Json<UpdateLegacyStudentRequest>,
) -> ActixResult<HttpResponse> {
    LEGACY_SERVICE
        .update_student(&req, student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    LEGACY_SERVICE.delete_student(&req, student_id.0).await
}

// 配置路由（第一代直接访问接口）
pub fn configure_legacy_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/legacy/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(web::resource("/samples").route(web::post().to(seed_samples)))
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
