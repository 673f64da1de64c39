//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::prelude::Teachers;
use crate::errors::{Result, RosterSystemError};
use crate::models::courses::{
    entities::{Course, CourseWithTeacher},
    requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    responses::CourseListResponse,
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程（teacher_id 必须指向已有教师，否则外键报错）
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程，联查授课教师姓名
    pub async fn list_courses_impl(&self, query: CourseListQuery) -> Result<CourseListResponse> {
        let mut select = Courses::find();

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

        let rows = select
            .find_also_related(Teachers)
            .all(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: rows
                .into_iter()
                .map(|(course, teacher)| CourseWithTeacher {
                    course: course.into_course(),
                    teacher_name: teacher.map(|t| t.name),
                })
                .collect(),
        })
    }

    /// 更新课程信息（覆盖全部可编辑字段）
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        // 先检查课程是否存在
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            name: Set(update.name),
            description: Set(update.description),
            teacher_id: Set(update.teacher_id),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程（RESTRICT 策略：仍有学生引用时报外键错误）
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计课程数量
    pub async fn count_courses_impl(&self) -> Result<u64> {
        Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("统计课程数量失败: {e}")))
    }
}
