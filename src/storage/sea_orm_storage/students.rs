//! 学生存储操作（第二代，带课程外键）

use super::SeaOrmStorage;
use crate::entity::prelude::Courses;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, RosterSystemError};
use crate::models::students::{
    entities::{Student, StudentWithCourse},
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    responses::StudentListResponse,
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 注册学生（course_id 必须指向已有课程，否则外键报错）
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            course_id: Set(req.course_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("注册学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出学生，按姓名排序并联查所选课程名称
    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<StudentListResponse> {
        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            // 转义后的模式必须声明转义符，否则通配符照常生效
            let escaped = escape_like_pattern(search.trim());
            select = select
                .filter(Column::Name.like(LikeExpr::new(format!("%{escaped}%")).escape('\\')));
        }

        // 排序
        select = select.order_by_asc(Column::Name);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let rows = select
            .find_also_related(Courses)
            .all(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: rows
                .into_iter()
                .map(|(student, course)| StudentWithCourse {
                    student: student.into_student(),
                    course_name: course.map(|c| c.name),
                })
                .collect(),
        })
    }

    /// 更新学生信息（覆盖全部可编辑字段）
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            name: Set(update.name),
            email: Set(update.email),
            course_id: Set(update.course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生（学生不被其他实体引用，删除不受限制）
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
