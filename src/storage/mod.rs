use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{
            CreateTeacherRequest, CreateTeacherWithCourseRequest, TeacherListQuery,
            UpdateTeacherRequest,
        },
        responses::TeacherListResponse,
    },
};

use crate::errors::Result;

pub mod raw_sqlite_storage;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers(&self, query: TeacherListQuery) -> Result<TeacherListResponse>;
    // 更新教师信息（覆盖全部可编辑字段）
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师（仍有课程引用时由外键策略拒绝）
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    // 统计教师数量
    async fn count_teachers(&self) -> Result<u64>;
    // 在同一事务中创建教师及其首门课程
    async fn create_teacher_with_course(
        &self,
        request: CreateTeacherWithCourseRequest,
    ) -> Result<(Teacher, Course)>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出课程（联查授课教师姓名）
    async fn list_courses(&self, query: CourseListQuery) -> Result<CourseListResponse>;
    // 更新课程信息（覆盖全部可编辑字段）
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程（仍有学生引用时由外键策略拒绝）
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 统计课程数量
    async fn count_courses(&self) -> Result<u64>;

    /// 学生管理方法
    // 注册学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生（按姓名排序，联查所选课程名称）
    async fn list_students(&self, query: StudentListQuery) -> Result<StudentListResponse>;
    // 更新学生信息（覆盖全部可编辑字段）
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
