//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod departments;
mod enrollments;
mod students;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{ContosoError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ContosoError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化，开启外键约束）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ContosoError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存库只存在于单个连接中，连接不能被回收
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size.max(1))
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| ContosoError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5.min(config.pool_size))
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ContosoError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ContosoError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 内存 SQLite，仅用于测试
    #[cfg(test)]
    pub(crate) async fn in_memory() -> Self {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
            seed_sample_data: false,
        };
        Self::connect(&config)
            .await
            .expect("in-memory SQLite should be available")
    }
}

/// 保存失败时保留原因；目标行在读取后消失视为冲突
pub(crate) fn save_error(context: &'static str) -> impl FnOnce(DbErr) -> ContosoError {
    move |e| match e {
        DbErr::RecordNotUpdated => ContosoError::update_conflict(format!("{context}: 记录已被删除或修改")),
        other => ContosoError::database_operation(format!("{context}: {other}")),
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedList,
    courses::{
        entities::{Course, CourseWithDepartment},
        requests::CourseChanges,
    },
    departments::entities::Department,
    enrollments::entities::{Enrollment, Grade},
    students::{
        entities::Student,
        requests::{StudentChanges, StudentListQuery},
        responses::StudentDetails,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedList<Student>> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_details(&self, id: i64) -> Result<Option<StudentDetails>> {
        self.get_student_details_impl(id).await
    }

    async fn create_student(&self, student: StudentChanges) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn update_student(&self, id: i64, changes: StudentChanges) -> Result<Option<Student>> {
        self.update_student_impl(id, changes).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    // 课程模块
    async fn list_courses(&self) -> Result<Vec<CourseWithDepartment>> {
        self.list_courses_impl().await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_details(&self, id: i64) -> Result<Option<CourseWithDepartment>> {
        self.get_course_details_impl(id).await
    }

    async fn create_course(&self, course: CourseChanges) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn update_course(&self, id: i64, changes: CourseChanges) -> Result<Option<Course>> {
        self.update_course_impl(id, changes).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn multiply_course_credits(&self, multiplier: i32) -> Result<u64> {
        self.multiply_course_credits_impl(multiplier).await
    }

    // 院系模块
    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn create_department(&self, name: &str) -> Result<Department> {
        self.create_department_impl(name).await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        student_id: i64,
        course_id: i64,
        grade: Option<Grade>,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, course_id, grade)
            .await
    }
}
