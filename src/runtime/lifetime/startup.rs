use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::{ContosoError, Result};
use crate::models::{
    courses::requests::CourseChanges, enrollments::entities::Grade,
    students::requests::StudentChanges,
};
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

// 示例数据：院系
const SAMPLE_DEPARTMENTS: [&str; 4] = ["English", "Mathematics", "Engineering", "Economics"];

// 示例数据：课程（标题、学分、院系）
const SAMPLE_COURSES: [(&str, i32, &str); 7] = [
    ("Chemistry", 3, "Engineering"),
    ("Microeconomics", 3, "Economics"),
    ("Macroeconomics", 3, "Economics"),
    ("Calculus", 4, "Mathematics"),
    ("Trigonometry", 4, "Mathematics"),
    ("Composition", 3, "English"),
    ("Literature", 4, "English"),
];

// 示例数据：学生（姓、名、入学日期）
const SAMPLE_STUDENTS: [(&str, &str, &str); 8] = [
    ("Alexander", "Carson", "2010-09-01"),
    ("Alonso", "Meredith", "2012-09-01"),
    ("Anand", "Arturo", "2013-09-01"),
    ("Barzdukas", "Gytis", "2012-09-01"),
    ("Li", "Yan", "2012-09-01"),
    ("Justice", "Peggy", "2011-09-01"),
    ("Norman", "Laura", "2013-09-01"),
    ("Olivetto", "Nino", "2005-09-01"),
];

// 示例数据：选课（学生姓、课程标题、成绩）
const SAMPLE_ENROLLMENTS: [(&str, &str, Option<Grade>); 11] = [
    ("Alexander", "Chemistry", Some(Grade::A)),
    ("Alexander", "Microeconomics", Some(Grade::C)),
    ("Alexander", "Macroeconomics", Some(Grade::B)),
    ("Alonso", "Calculus", Some(Grade::B)),
    ("Alonso", "Trigonometry", Some(Grade::B)),
    ("Alonso", "Composition", Some(Grade::B)),
    ("Anand", "Chemistry", None),
    ("Anand", "Microeconomics", Some(Grade::B)),
    ("Barzdukas", "Chemistry", Some(Grade::B)),
    ("Li", "Composition", Some(Grade::B)),
    ("Justice", "Literature", Some(Grade::B)),
];

/// 写入示例数据；数据库中已有学生时跳过
pub async fn seed_sample_data(storage: &Arc<dyn Storage>) -> Result<bool> {
    let count = storage.count_students().await?;
    if count > 0 {
        debug!(
            "Database already has {} student(s), skipping sample data",
            count
        );
        return Ok(false);
    }

    info!("No students found in database, seeding sample data...");

    let mut departments = HashMap::new();
    for name in SAMPLE_DEPARTMENTS {
        let department = storage.create_department(name).await?;
        departments.insert(name, department.id);
    }

    let mut courses = HashMap::new();
    for (title, credits, department) in SAMPLE_COURSES {
        let department_id = *departments.get(department).ok_or_else(|| {
            ContosoError::not_found(format!("Sample department missing: {department}"))
        })?;
        let course = storage
            .create_course(CourseChanges {
                title: title.to_string(),
                credits,
                department_id,
            })
            .await?;
        courses.insert(title, course.id);
    }

    let mut students = HashMap::new();
    for (last_name, first_mid_name, date) in SAMPLE_STUDENTS {
        let student = storage
            .create_student(StudentChanges {
                last_name: last_name.to_string(),
                first_mid_name: first_mid_name.to_string(),
                enrollment_date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
            })
            .await?;
        students.insert(last_name, student.id);
    }

    for (last_name, title, grade) in SAMPLE_ENROLLMENTS {
        let (Some(student_id), Some(course_id)) = (students.get(last_name), courses.get(title))
        else {
            return Err(ContosoError::not_found(format!(
                "Sample enrollment refers to unknown student or course: {last_name} / {title}"
            )));
        };
        storage
            .create_enrollment(*student_id, *course_id, grade)
            .await?;
    }

    info!(
        "Sample data created: {} departments, {} courses, {} students, {} enrollments",
        SAMPLE_DEPARTMENTS.len(),
        SAMPLE_COURSES.len(),
        SAMPLE_STUDENTS.len(),
        SAMPLE_ENROLLMENTS.len()
    );
    Ok(true)
}

/// 准备服务器启动的上下文
/// 包括 TLS 提供者、存储和示例数据
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    if AppConfig::get().database.seed_sample_data {
        if let Err(e) = seed_sample_data(&storage).await {
            warn!("Failed to seed sample data: {}", e);
        }
    } else {
        debug!("Sample data seeding disabled");
    }

    StartupContext { storage }
}
