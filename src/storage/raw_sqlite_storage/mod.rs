//! 第一代直接访问存储（原始 SQL）
//!
//! 不经过实体映射：每次操作打开一个新的单连接句柄，执行字面 SQL，
//! 句柄在离开作用域时随 drop 释放（包括出错路径，调用方无需手动关闭）。
//! 仅支持 SQLite 单文件，对应扁平的 `students` 表。

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, FromQueryResult,
    Statement,
};
use tracing::info;

use crate::config::AppConfig;
use crate::errors::{Result, RosterSystemError};
use crate::models::legacy::{
    entities::LegacyStudent,
    requests::{CreateLegacyStudentRequest, UpdateLegacyStudentRequest},
};

/// 原教程第一部分的三行示例数据
const SAMPLE_STUDENTS: [(&str, &str, &str); 3] = [
    ("Mayuri Mahajan", "mayuri@gmail.com", "Data Science"),
    ("Amit Sharma", "amit@gmail.com", "Web Development"),
    ("Sneha Patil", "sneha@gmail.com", "Machine Learning"),
];

/// 按列名读取的行结构
#[derive(Debug, FromQueryResult)]
struct LegacyStudentRow {
    id: i64,
    name: String,
    email: String,
    course: String,
}

impl LegacyStudentRow {
    fn into_legacy_student(self) -> LegacyStudent {
        LegacyStudent {
            id: self.id,
            name: self.name,
            email: self.email,
            course: self.course,
        }
    }
}

/// 第一代存储：只保存连接 URL，不持有任何句柄
pub struct RawSqliteStorage {
    url: String,
}

impl RawSqliteStorage {
    /// 从全局配置创建（database.legacy_url）
    pub fn new_from_config() -> Result<Self> {
        let config = AppConfig::get();
        Self::new(&config.database.legacy_url)
    }

    /// 按显式路径或 URL 创建
    pub fn new(url: &str) -> Result<Self> {
        let url = if url.starts_with("sqlite:") {
            url.to_string()
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            format!("sqlite://{url}?mode=rwc")
        } else {
            return Err(RosterSystemError::database_config(format!(
                "第一代存储仅支持 SQLite: {url}"
            )));
        };
        Ok(Self { url })
    }

    /// 为单次操作打开新句柄
    async fn open(&self) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(1)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| RosterSystemError::database_connection(format!("打开第一代存储失败: {e}")))
    }

    /// 建表（幂等，进程启动时调用一次）
    pub async fn init(&self) -> Result<()> {
        let db = self.open().await?;
        db.execute_raw(Statement::from_string(
            DbBackend::Sqlite,
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                course TEXT NOT NULL
            )",
        ))
        .await
        .map_err(|e| RosterSystemError::database_operation(format!("创建第一代学生表失败: {e}")))?;

        info!("第一代存储初始化完成，数据库: {}", self.url);
        Ok(())
    }

    /// 列出全部学生
    pub async fn list_students(&self) -> Result<Vec<LegacyStudent>> {
        let db = self.open().await?;
        let rows = LegacyStudentRow::find_by_statement(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT id, name, email, course FROM students ORDER BY id",
        ))
        .all(&db)
        .await
        .map_err(|e| RosterSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(LegacyStudentRow::into_legacy_student)
            .collect())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id(&self, id: i64) -> Result<Option<LegacyStudent>> {
        let db = self.open().await?;
        let row = LegacyStudentRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT id, name, email, course FROM students WHERE id = ?",
            [id.into()],
        ))
        .one(&db)
        .await
        .map_err(|e| RosterSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(row.map(LegacyStudentRow::into_legacy_student))
    }

    /// 登记学生
    pub async fn create_student(&self, req: CreateLegacyStudentRequest) -> Result<LegacyStudent> {
        let db = self.open().await?;
        db.execute_raw(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "INSERT INTO students (name, email, course) VALUES (?, ?, ?)",
            [req.name.into(), req.email.into(), req.course.into()],
        ))
        .await
        .map_err(|e| RosterSystemError::database_operation(format!("登记学生失败: {e}")))?;

        // 单连接池：last_insert_rowid() 与上面的 INSERT 在同一连接上
        let row = LegacyStudentRow::find_by_statement(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT id, name, email, course FROM students WHERE id = last_insert_rowid()",
        ))
        .one(&db)
        .await
        .map_err(|e| RosterSystemError::database_operation(format!("回读学生失败: {e}")))?
        .ok_or_else(|| RosterSystemError::database_operation("登记学生后未找到记录"))?;

        Ok(row.into_legacy_student())
    }

    /// 更新学生（覆盖全部字段）
    pub async fn update_student(
        &self,
        id: i64,
        req: UpdateLegacyStudentRequest,
    ) -> Result<Option<LegacyStudent>> {
        let db = self.open().await?;
        let result = db
            .execute_raw(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "UPDATE students SET name = ?, email = ?, course = ? WHERE id = ?",
                [req.name.into(), req.email.into(), req.course.into(), id.into()],
            ))
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("更新学生失败: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        drop(db);
        self.get_student_by_id(id).await
    }

    /// 删除学生
    pub async fn delete_student(&self, id: i64) -> Result<bool> {
        let db = self.open().await?;
        let result = db
            .execute_raw(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "DELETE FROM students WHERE id = ?",
                [id.into()],
            ))
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// 批量写入示例学生，返回插入条数
    pub async fn insert_sample_students(&self) -> Result<u64> {
        let db = self.open().await?;
        let mut inserted = 0;

        for (name, email, course) in SAMPLE_STUDENTS {
            let result = db
                .execute_raw(Statement::from_sql_and_values(
                    DbBackend::Sqlite,
                    "INSERT INTO students (name, email, course) VALUES (?, ?, ?)",
                    [name.into(), email.into(), course.into()],
                ))
                .await
                .map_err(|e| {
                    RosterSystemError::database_operation(format!("写入示例学生失败: {e}"))
                })?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_storage(dir: &tempfile::TempDir) -> RawSqliteStorage {
        let path = dir.path().join("students.db");
        RawSqliteStorage::new(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_new_rejects_non_sqlite_url() {
        assert!(RawSqliteStorage::new("postgres://localhost/school").is_err());
        assert!(RawSqliteStorage::new("students.db").is_ok());
        assert!(RawSqliteStorage::new("sqlite://students.db?mode=rwc").is_ok());
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = file_storage(&dir);
        storage.init().await.unwrap();
        storage.init().await.unwrap();
    }

    #[tokio::test]
    async fn test_rows_persist_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let storage = file_storage(&dir);
        storage.init().await.unwrap();

        let created = storage
            .create_student(CreateLegacyStudentRequest {
                name: "Mayuri Mahajan".to_string(),
                email: "mayuri@gmail.com".to_string(),
                course: "Data Science".to_string(),
            })
            .await
            .unwrap();

        // 每次操作都是新句柄：数据必须落在文件里
        let listing = storage.list_students().await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, created.id);
        assert_eq!(listing[0].course, "Data Science");
    }

    #[tokio::test]
    async fn test_sample_seed_inserts_three_rows() {
        let dir = tempfile::tempdir().unwrap();
        let storage = file_storage(&dir);
        storage.init().await.unwrap();

        assert_eq!(storage.insert_sample_students().await.unwrap(), 3);

        let listing = storage.list_students().await.unwrap();
        let names: Vec<_> = listing.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Mayuri Mahajan", "Amit Sharma", "Sneha Patil"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = file_storage(&dir);
        storage.init().await.unwrap();

        let created = storage
            .create_student(CreateLegacyStudentRequest {
                name: "Amit Sharma".to_string(),
                email: "amit@gmail.com".to_string(),
                course: "Web Development".to_string(),
            })
            .await
            .unwrap();

        let updated = storage
            .update_student(
                created.id,
                UpdateLegacyStudentRequest {
                    name: "Amit S.".to_string(),
                    email: "amit.s@gmail.com".to_string(),
                    course: "Python".to_string(),
                },
            )
            .await
            .unwrap()
            .expect("student should exist");
        assert_eq!(updated.name, "Amit S.");
        assert_eq!(updated.course, "Python");

        assert!(storage.delete_student(created.id).await.unwrap());
        assert!(storage.get_student_by_id(created.id).await.unwrap().is_none());
        assert!(!storage.delete_student(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_student_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = file_storage(&dir);
        storage.init().await.unwrap();

        let result = storage
            .update_student(
                404,
                UpdateLegacyStudentRequest {
                    name: "Nobody".to_string(),
                    email: "nobody@gmail.com".to_string(),
                    course: "None".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
