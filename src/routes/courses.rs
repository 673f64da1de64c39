use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest};
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{course_id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course))
                    .route(web::delete().to(delete_course)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::teachers::configure_teachers_routes;
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
    async fn test_course_listing_includes_teacher_name() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_teachers_routes)
                .configure(configure_courses_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/teachers")
                .set_json(serde_json::json!({
                    "name": "Dr. Sharma",
                    "email": "sharma@gmail.com"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        let teacher: serde_json::Value = test::read_body_json(resp).await;
        let teacher_id = teacher["data"]["id"].as_i64().unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/courses")
                .set_json(serde_json::json!({
                    "name": "Python Basics",
                    "description": "Intro to Python",
                    "teacher_id": teacher_id
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/courses").to_request(),
        )
        .await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Python Basics");
        assert_eq!(items[0]["teacher_name"], "Dr. Sharma");
    }

    #[actix_web::test]
    async fn test_create_course_for_missing_teacher_returns_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(memory_storage().await)
                .configure(configure_courses_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/courses")
                .set_json(serde_json::json!({
                    "name": "Python Basics",
                    "description": null,
                    "teacher_id": 9999
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
