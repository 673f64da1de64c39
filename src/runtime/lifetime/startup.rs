use crate::config::AppConfig;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::teachers::requests::{CreateTeacherRequest, TeacherListQuery};
use crate::storage::Storage;
use crate::storage::raw_sqlite_storage::RawSqliteStorage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub legacy_storage: Arc<RawSqliteStorage>,
}

/// 原教程的初始教师数据
const DEMO_TEACHERS: [(&str, &str); 2] = [
    ("Dr. Sharma", "sharma@gmail.com"),
    ("Prof. Mehta", "mehta@gmail.com"),
];

/// 原教程的初始课程数据（第三列为授课教师邮箱）
const DEMO_COURSES: [(&str, &str, &str); 3] = [
    ("Python Basics", "Intro to Python", "sharma@gmail.com"),
    ("Web Development", "Flask & Web", "mehta@gmail.com"),
    ("Data Science", "Data Analysis", "sharma@gmail.com"),
];

/// 写入示例教师
/// 仅在教师表为空时执行，失败只告警不中断启动
async fn seed_demo_teachers(storage: &Arc<dyn Storage>) {
    match storage.count_teachers().await {
        Ok(0) => {
            info!("No teachers found in database, seeding demo teachers...");
        }
        Ok(count) => {
            debug!("Database already has {} teacher(s), skipping teacher seed", count);
            return;
        }
        Err(e) => {
            warn!("Failed to count teachers: {}, skipping teacher seed", e);
            return;
        }
    }

    for (name, email) in DEMO_TEACHERS {
        match storage
            .create_teacher(CreateTeacherRequest {
                name: name.to_string(),
                email: email.to_string(),
            })
            .await
        {
            Ok(teacher) => {
                info!("Demo teacher created (ID: {}, name: {})", teacher.id, teacher.name);
            }
            Err(e) => {
                warn!("Failed to seed teacher {}: {}", name, e);
                return;
            }
        }
    }
}

/// 写入示例课程
/// 仅在课程表为空时执行；授课教师按邮箱从已有教师中解析
async fn seed_demo_courses(storage: &Arc<dyn Storage>) {
    match storage.count_courses().await {
        Ok(0) => {
            info!("No courses found in database, seeding demo courses...");
        }
        Ok(count) => {
            debug!("Database already has {} course(s), skipping course seed", count);
            return;
        }
        Err(e) => {
            warn!("Failed to count courses: {}, skipping course seed", e);
            return;
        }
    }

    let teachers = match storage.list_teachers(TeacherListQuery::default()).await {
        Ok(listing) => listing.items,
        Err(e) => {
            warn!("Failed to list teachers: {}, skipping course seed", e);
            return;
        }
    };

    for (name, description, teacher_email) in DEMO_COURSES {
        let Some(teacher_id) = teachers
            .iter()
            .find(|t| t.email == teacher_email)
            .map(|t| t.id)
        else {
            warn!("Teacher {} not found, skipping course {}", teacher_email, name);
            continue;
        };

        match storage
            .create_course(CreateCourseRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
                teacher_id,
            })
            .await
        {
            Ok(course) => {
                info!("Demo course created (ID: {}, name: {})", course.id, course.name);
            }
            Err(e) => {
                warn!("Failed to seed course {}: {}", name, e);
            }
        }
    }
}

/// 准备服务器启动的上下文
/// 包括两代存储的初始化与示例数据写入
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();

    // 第二代（映射访问）存储：连接池 + 迁移
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 第一代（直接访问）存储：建表即可，句柄按操作临时打开
    let legacy_storage = Arc::new(
        RawSqliteStorage::new_from_config().expect("Failed to configure legacy storage"),
    );
    legacy_storage
        .init()
        .await
        .expect("Failed to initialize legacy storage");
    warn!("Legacy storage backend initialized");

    // 空库时写入示例教师/课程
    if config.database.seed_demo_data {
        seed_demo_teachers(&storage).await;
        seed_demo_courses(&storage).await;
    }

    StartupContext {
        storage,
        legacy_storage,
    }
}
