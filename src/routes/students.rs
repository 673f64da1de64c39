use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{
    CreateStudentRequest, StudentListQuery, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, student_id.0).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::{App, test};
    use std::sync::Arc;

    async fn memory_storage() -> web::Data<Arc<dyn Storage>> {
        let storage: Arc<dyn Storage> = Arc::new(
            SeaOrmStorage::new_with_options("sqlite::memory:", 1, 5)
                .await
                .expect("in-memory storage should initialize"),
        );
        web::Data::new(storage)
    }

    #[actix_web::test]
    async fn test_student_with_missing_course_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_students_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/students")
                .set_json(serde_json::json!({
                    "name": "Mayuri Mahajan",
                    "email": "mayuri@gmail.com",
                    "course_id": 9999
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Course does not exist");
    }

    #[actix_web::test]
    async fn test_missing_json_field_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_students_routes),
        )
        .await;

        // 缺少 email 字段：JSON 反序列化直接失败
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/students")
                .set_json(serde_json::json!({
                    "name": "Mayuri Mahajan",
                    "course_id": 1
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
