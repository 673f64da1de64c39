//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::courses::ActiveModel as CourseActiveModel;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{Result, RosterSystemError};
use crate::models::{
    courses::entities::Course,
    teachers::{
        entities::Teacher,
        requests::{
            CreateTeacherRequest, CreateTeacherWithCourseRequest, TeacherListQuery,
            UpdateTeacherRequest,
        },
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 列出教师（可选搜索与条数上限，无分页）
    pub async fn list_teachers_impl(&self, query: TeacherListQuery) -> Result<TeacherListResponse> {
        let mut select = Teachers::find();

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
        select = select.order_by_asc(Column::Id);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let teachers = select
            .all(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
        })
    }

    /// 更新教师信息（覆盖全部可编辑字段）
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        // 先检查教师是否存在
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            name: Set(update.name),
            email: Set(update.email),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师（RESTRICT 策略：仍有课程引用时报外键错误）
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("统计教师数量失败: {e}")))
    }

    /// 在同一事务中创建教师及其首门课程
    ///
    /// 任何一步失败时事务随 drop 回滚，不会留下半套数据。
    pub async fn create_teacher_with_course_impl(
        &self,
        req: CreateTeacherWithCourseRequest,
    ) -> Result<(Teacher, Course)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let teacher = ActiveModel {
            name: Set(req.teacher_name),
            email: Set(req.teacher_email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| RosterSystemError::database_operation(format!("创建教师失败: {e}")))?;

        let course = CourseActiveModel {
            name: Set(req.course_name),
            description: Set(req.course_description),
            teacher_id: Set(teacher.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| RosterSystemError::database_operation(format!("创建课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((teacher.into_teacher(), course.into_course()))
    }
}
