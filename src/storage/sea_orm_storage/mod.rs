//! SeaORM 存储实现（第二代，映射访问）
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 所有读写走同一个连接池；SQLite 连接显式开启外键约束，
//! 因此引用不存在课程/教师的写入会在存储层被拒绝。

mod courses;
mod students;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{Result, RosterSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 从全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_options(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 按显式参数创建存储实例（测试中直接使用内存库）
    pub async fn new_with_options(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移（幂等：重复执行不改变已有表）
        Migrator::up(&db, None)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化 + 外键约束）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RosterSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            // SQLite 默认不检查外键，必须逐连接开启
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| RosterSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RosterSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RosterSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers(&self, query: TeacherListQuery) -> Result<TeacherListResponse> {
        self.list_teachers_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn count_teachers(&self) -> Result<u64> {
        self.count_teachers_impl().await
    }

    async fn create_teacher_with_course(
        &self,
        request: CreateTeacherWithCourseRequest,
    ) -> Result<(Teacher, Course)> {
        self.create_teacher_with_course_impl(request).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self, query: CourseListQuery) -> Result<CourseListResponse> {
        self.list_courses_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn count_courses(&self) -> Result<u64> {
        self.count_courses_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students(&self, query: StudentListQuery) -> Result<StudentListResponse> {
        self.list_students_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_memory() -> &'static str {
        // 池大小为 1，保证所有操作命中同一个内存库
        "sqlite::memory:"
    }

    async fn test_storage() -> SeaOrmStorage {
        SeaOrmStorage::new_with_options(sqlite_memory(), 1, 5)
            .await
            .expect("in-memory storage should initialize")
    }

    fn teacher_req(name: &str, email: &str) -> CreateTeacherRequest {
        CreateTeacherRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_build_database_url_sqlite_path() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite://school.db?mode=rwc").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
    }

    #[test]
    fn test_build_database_url_rejects_unknown() {
        assert!(SeaOrmStorage::build_database_url("mongodb://x").is_err());
    }

    #[tokio::test]
    async fn test_migration_is_idempotent() {
        let storage = test_storage().await;
        // 对同一连接再次执行迁移不应报错
        Migrator::up(&storage.db, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_created_teacher_listed_exactly_once() {
        let storage = test_storage().await;
        storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();

        let listing = storage
            .list_teachers_impl(TeacherListQuery::default())
            .await
            .unwrap();
        let matches = listing
            .items
            .iter()
            .filter(|t| t.email == "sharma@gmail.com")
            .count();
        assert_eq!(matches, 1);
    }

    #[tokio::test]
    async fn test_duplicate_teacher_email_rejected() {
        let storage = test_storage().await;
        storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();

        let err = storage
            .create_teacher_impl(teacher_req("Impostor", "sharma@gmail.com"))
            .await
            .unwrap_err();
        assert!(err.message().contains("UNIQUE constraint failed"));
    }

    #[tokio::test]
    async fn test_student_with_unknown_course_rejected() {
        let storage = test_storage().await;

        let err = storage
            .create_student_impl(CreateStudentRequest {
                name: "Mayuri Mahajan".to_string(),
                email: "mayuri@gmail.com".to_string(),
                course_id: 9999,
            })
            .await
            .unwrap_err();
        assert!(err.message().contains("FOREIGN KEY constraint failed"));
    }

    #[tokio::test]
    async fn test_course_listing_includes_teacher_name() {
        let storage = test_storage().await;
        let teacher = storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();
        storage
            .create_course_impl(CreateCourseRequest {
                name: "Python Basics".to_string(),
                description: Some("Intro to Python".to_string()),
                teacher_id: teacher.id,
            })
            .await
            .unwrap();

        let listing = storage
            .list_courses_impl(CourseListQuery::default())
            .await
            .unwrap();
        let entry = listing
            .items
            .iter()
            .find(|c| c.course.name == "Python Basics")
            .expect("course should be listed");
        assert_eq!(entry.teacher_name.as_deref(), Some("Dr. Sharma"));
    }

    #[tokio::test]
    async fn test_delete_referenced_teacher_rejected() {
        let storage = test_storage().await;
        let teacher = storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();
        storage
            .create_course_impl(CreateCourseRequest {
                name: "Python Basics".to_string(),
                description: None,
                teacher_id: teacher.id,
            })
            .await
            .unwrap();

        let err = storage.delete_teacher_impl(teacher.id).await.unwrap_err();
        assert!(err.message().contains("FOREIGN KEY constraint failed"));
        // 教师与课程都原样保留
        assert!(
            storage
                .get_teacher_by_id_impl(teacher.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_delete_student_leaves_course_intact() {
        let storage = test_storage().await;
        let teacher = storage
            .create_teacher_impl(teacher_req("Prof. Mehta", "mehta@gmail.com"))
            .await
            .unwrap();
        let course = storage
            .create_course_impl(CreateCourseRequest {
                name: "Web Development".to_string(),
                description: Some("Flask & Web".to_string()),
                teacher_id: teacher.id,
            })
            .await
            .unwrap();
        let student = storage
            .create_student_impl(CreateStudentRequest {
                name: "Amit Sharma".to_string(),
                email: "amit@gmail.com".to_string(),
                course_id: course.id,
            })
            .await
            .unwrap();

        assert!(storage.delete_student_impl(student.id).await.unwrap());

        let listing = storage
            .list_students_impl(StudentListQuery::default())
            .await
            .unwrap();
        assert!(listing.items.is_empty());
        assert!(
            storage
                .get_course_by_id_impl(course.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_update_student_then_refetch() {
        let storage = test_storage().await;
        let teacher = storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();
        let first = storage
            .create_course_impl(CreateCourseRequest {
                name: "Python Basics".to_string(),
                description: None,
                teacher_id: teacher.id,
            })
            .await
            .unwrap();
        let second = storage
            .create_course_impl(CreateCourseRequest {
                name: "Data Science".to_string(),
                description: None,
                teacher_id: teacher.id,
            })
            .await
            .unwrap();
        let student = storage
            .create_student_impl(CreateStudentRequest {
                name: "Sneha Patil".to_string(),
                email: "sneha@gmail.com".to_string(),
                course_id: first.id,
            })
            .await
            .unwrap();

        storage
            .update_student_impl(
                student.id,
                UpdateStudentRequest {
                    name: "Sneha P.".to_string(),
                    email: "sneha.p@gmail.com".to_string(),
                    course_id: second.id,
                },
            )
            .await
            .unwrap()
            .expect("student should exist");

        let refetched = storage
            .get_student_by_id_impl(student.id)
            .await
            .unwrap()
            .expect("student should exist");
        assert_eq!(refetched.name, "Sneha P.");
        assert_eq!(refetched.email, "sneha.p@gmail.com");
        assert_eq!(refetched.course_id, second.id);
    }

    #[tokio::test]
    async fn test_students_listed_by_name() {
        let storage = test_storage().await;
        let teacher = storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();
        let course = storage
            .create_course_impl(CreateCourseRequest {
                name: "Python Basics".to_string(),
                description: None,
                teacher_id: teacher.id,
            })
            .await
            .unwrap();
        for (name, email) in [
            ("Sneha Patil", "sneha@gmail.com"),
            ("Amit Sharma", "amit@gmail.com"),
            ("Mayuri Mahajan", "mayuri@gmail.com"),
        ] {
            storage
                .create_student_impl(CreateStudentRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    course_id: course.id,
                })
                .await
                .unwrap();
        }

        let listing = storage
            .list_students_impl(StudentListQuery::default())
            .await
            .unwrap();
        let names: Vec<_> = listing
            .items
            .iter()
            .map(|s| s.student.name.as_str())
            .collect();
        assert_eq!(names, ["Amit Sharma", "Mayuri Mahajan", "Sneha Patil"]);
        assert!(
            listing
                .items
                .iter()
                .all(|s| s.course_name.as_deref() == Some("Python Basics"))
        );
    }

    #[tokio::test]
    async fn test_list_teachers_search_and_limit() {
        let storage = test_storage().await;
        storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();
        storage
            .create_teacher_impl(teacher_req("Prof. Mehta", "mehta@gmail.com"))
            .await
            .unwrap();

        let filtered = storage
            .list_teachers_impl(TeacherListQuery {
                search: Some("Sharma".to_string()),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].name, "Dr. Sharma");

        let limited = storage
            .list_teachers_impl(TeacherListQuery {
                search: None,
                limit: Some(1),
            })
            .await
            .unwrap();
        assert_eq!(limited.items.len(), 1);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let storage = test_storage().await;
        storage
            .create_teacher_impl(teacher_req("100% Onsite", "onsite@gmail.com"))
            .await
            .unwrap();
        storage
            .create_teacher_impl(teacher_req("100 Percent", "percent@gmail.com"))
            .await
            .unwrap();

        // `%` 在搜索词中是字面字符，不是通配符
        let filtered = storage
            .list_teachers_impl(TeacherListQuery {
                search: Some("100%".to_string()),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(filtered.items.len(), 1);
        assert_eq!(filtered.items[0].email, "onsite@gmail.com");
    }

    #[tokio::test]
    async fn test_teacher_with_course_commits_together() {
        let storage = test_storage().await;
        let (teacher, course) = storage
            .create_teacher_with_course_impl(CreateTeacherWithCourseRequest {
                teacher_name: "Dr. Sharma".to_string(),
                teacher_email: "sharma@gmail.com".to_string(),
                course_name: "Python Basics".to_string(),
                course_description: Some("Intro to Python".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(course.teacher_id, teacher.id);
        assert_eq!(storage.count_teachers_impl().await.unwrap(), 1);
        assert_eq!(storage.count_courses_impl().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_teacher_with_course_rolls_back_on_duplicate_email() {
        let storage = test_storage().await;
        storage
            .create_teacher_impl(teacher_req("Dr. Sharma", "sharma@gmail.com"))
            .await
            .unwrap();

        let err = storage
            .create_teacher_with_course_impl(CreateTeacherWithCourseRequest {
                teacher_name: "Dr. Sharma II".to_string(),
                teacher_email: "sharma@gmail.com".to_string(),
                course_name: "Python Basics".to_string(),
                course_description: None,
            })
            .await
            .unwrap_err();
        assert!(err.message().contains("UNIQUE constraint failed"));

        // 事务回滚：没有写入任何课程
        assert_eq!(storage.count_teachers_impl().await.unwrap(), 1);
        assert_eq!(storage.count_courses_impl().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_rows_report_false() {
        let storage = test_storage().await;
        assert!(!storage.delete_teacher_impl(404).await.unwrap());
        assert!(!storage.delete_course_impl(404).await.unwrap());
        assert!(!storage.delete_student_impl(404).await.unwrap());
    }
}
