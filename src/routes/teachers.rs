use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teachers::requests::{
    CreateTeacherRequest, CreateTeacherWithCourseRequest, TeacherListQuery, UpdateTeacherRequest,
};
use crate::services::TeacherService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 TEACHER_SERVICE 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListQuery>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req, query.into_inner()).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(&req, teacher_data.into_inner())
        .await
}

pub async fn create_teacher_with_course(
    req: HttpRequest,
    data: web::Json<CreateTeacherWithCourseRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher_with_course(&req, data.into_inner())
        .await
}

pub async fn get_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, teacher_id.0).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&req, teacher_id.0, update_data.into_inner())
        .await
}

pub async fn delete_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, teacher_id.0).await
}

// 配置路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers))
                    .route(web::post().to(create_teacher)),
            )
            .service(
                // 教师与首门课程在同一事务中创建
                web::resource("/with-course").route(web::post().to(create_teacher_with_course)),
            )
            .service(
                web::resource("/{teacher_id}")
                    .route(web::get().to(get_teacher))
                    .route(web::put().to(update_teacher))
                    .route(web::delete().to(delete_teacher)),
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
    async fn test_create_then_list_teacher() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_teachers_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/teachers")
            .set_json(serde_json::json!({
                "name": "Dr. Sharma",
                "email": "sharma@gmail.com"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/teachers").to_request(),
        )
        .await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Dr. Sharma");
    }

    #[actix_web::test]
    async fn test_duplicate_email_returns_conflict() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_teachers_routes),
        )
        .await;
        let payload = serde_json::json!({
            "name": "Dr. Sharma",
            "email": "sharma@gmail.com"
        });

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/teachers")
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/teachers")
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_invalid_email_returns_unprocessable() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_teachers_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/teachers")
                .set_json(serde_json::json!({
                    "name": "Dr. Sharma",
                    "email": "not-an-email"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[actix_web::test]
    async fn test_get_missing_teacher_returns_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_teachers_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/teachers/404")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bad_teacher_id_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_teachers_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/teachers/abc")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_with_course_creates_both() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_teachers_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/teachers/with-course")
                .set_json(serde_json::json!({
                    "teacher_name": "Dr. Sharma",
                    "teacher_email": "sharma@gmail.com",
                    "course_name": "Python Basics",
                    "course_description": "Intro to Python"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["teacher"]["name"], "Dr. Sharma");
        assert_eq!(body["data"]["course"]["name"], "Python Basics");
        assert_eq!(
            body["data"]["course"]["teacher_id"],
            body["data"]["teacher"]["id"]
        );
    }
}
