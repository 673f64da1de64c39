//! 路径参数提取器
//!
//! 在处理函数执行前就把非数字或非正数的 ID 拦截为 400，
//! 处理函数内部因此只需要面对合法的 i64。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

/// 为指定路径参数生成一个只接受正整数的提取器
macro_rules! define_safe_id_extractor {
    ($(
        $name:ident => $param:literal
    ),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|raw| raw.parse::<i64>().ok())
                        .filter(|id| *id > 0);

                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => {
                            let response = HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::BadRequest,
                                    concat!("Invalid ", $param, ": must be a positive integer"),
                                ),
                            );
                            Err(InternalError::from_response(
                                concat!("Invalid ", $param),
                                response,
                            )
                            .into())
                        }
                    })
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeTeacherIdI64 => "teacher_id",
    SafeCourseIdI64 => "course_id",
    SafeStudentIdI64 => "student_id",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_id_is_extracted() {
        let req = TestRequest::default()
            .param("teacher_id", "42")
            .to_http_request();
        let id = SafeTeacherIdI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_rejected() {
        let req = TestRequest::default()
            .param("student_id", "abc")
            .to_http_request();
        assert!(SafeStudentIdI64::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_non_positive_id_is_rejected() {
        let req = TestRequest::default()
            .param("course_id", "0")
            .to_http_request();
        assert!(SafeCourseIdI64::extract(&req).await.is_err());

        let req = TestRequest::default()
            .param("course_id", "-3")
            .to_http_request();
        assert!(SafeCourseIdI64::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_missing_param_is_rejected() {
        let req = TestRequest::default().to_http_request();
        assert!(SafeTeacherIdI64::extract(&req).await.is_err());
    }
}
