//! 第一代学生表服务（直接访问）
//!
//! 挂在 `/api/v1/legacy` 下，保留教程第一部分的扁平语义：
//! 课程是自由文本，不校验邮箱唯一性。

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod seed_samples;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::legacy::requests::{CreateLegacyStudentRequest, UpdateLegacyStudentRequest};
use crate::storage::raw_sqlite_storage::RawSqliteStorage;

pub struct LegacyStudentService {
    storage: Option<Arc<RawSqliteStorage>>,
}

impl LegacyStudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    // 第一代存储是具体类型，不走 Storage trait
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<RawSqliteStorage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<RawSqliteStorage>>>()
                .expect("Legacy storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取扁平学生列表
    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_students(self, request).await
    }

    // 登记扁平学生
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        student_data: CreateLegacyStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, student_data).await
    }

    // 写入示例学生
    pub async fn seed_samples(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        seed_samples::seed_samples(self, request).await
    }

    // 根据学生 ID 获取扁平学生信息
    pub async fn get_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, request, student_id).await
    }

    // 更新扁平学生信息
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        update_data: UpdateLegacyStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, update_data).await
    }

    // 根据学生 ID 删除扁平学生
    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }
}
