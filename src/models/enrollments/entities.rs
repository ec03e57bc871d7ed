use serde::Serialize;
use ts_rs::TS;

use crate::models::courses::entities::Course;

// 成绩等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(format!("Invalid grade: '{s}'. Supported: A, B, C, D, F")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    // 尚未评分时为空
    pub grade: Option<Grade>,
}

// 学生详情页中的选课记录，附带课程
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "enrollment.ts")]
pub struct EnrollmentWithCourse {
    pub id: i64,
    pub grade: Option<Grade>,
    pub course: Course,
}
