use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    FieldError,
    courses::requests::{CourseChanges, CourseForm},
    students::requests::{StudentChanges, StudentForm},
};

static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}\s'.-]*$").expect("Invalid person name regex"));

pub const NAME_MAX_LEN: usize = 50;
pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 50;
pub const CREDITS_MIN: i32 = 0;
pub const CREDITS_MAX: i32 = 5;

/// 最早可接受的入学日期
pub fn earliest_enrollment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1753, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn validate_person_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("This field is required");
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err("Name cannot be longer than 50 characters");
    }
    if !PERSON_NAME_RE.is_match(name) {
        return Err("Name must start with a letter and contain only letters, spaces, apostrophes, periods or hyphens");
    }
    Ok(())
}

pub fn validate_enrollment_date(value: &str) -> Result<NaiveDate, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("This field is required");
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Enrollment date must be a valid date in YYYY-MM-DD format")?;
    if date < earliest_enrollment_date() {
        return Err("Enrollment date cannot be earlier than 1753-01-01");
    }
    Ok(date)
}

pub fn validate_course_title(title: &str) -> Result<(), &'static str> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err("This field is required");
    }
    if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&len) {
        return Err("Title must be between 3 and 50 characters");
    }
    Ok(())
}

pub fn validate_credits(value: &str) -> Result<i32, &'static str> {
    let credits: i32 = value
        .trim()
        .parse()
        .map_err(|_| "Credits must be a whole number")?;
    if !(CREDITS_MIN..=CREDITS_MAX).contains(&credits) {
        return Err("Credits must be between 0 and 5");
    }
    Ok(credits)
}

pub fn validate_department_id(value: &str) -> Result<i64, &'static str> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Please select a department"),
    }
}

/// 批量调整学分的系数必须是正整数
pub fn validate_multiplier(value: &str) -> Result<i32, &'static str> {
    match value.trim().parse::<i32>() {
        Ok(multiplier) if multiplier >= 1 => Ok(multiplier),
        _ => Err("The multiplier must be a positive whole number."),
    }
}

/// 校验学生表单，全部通过时返回可写入的字段
pub fn validate_student_form(form: &StudentForm) -> Result<StudentChanges, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_person_name(&form.last_name) {
        errors.push(FieldError::new("last_name", msg));
    }
    if let Err(msg) = validate_person_name(&form.first_mid_name) {
        errors.push(FieldError::new("first_mid_name", msg));
    }
    let enrollment_date = match validate_enrollment_date(&form.enrollment_date) {
        Ok(date) => Some(date),
        Err(msg) => {
            errors.push(FieldError::new("enrollment_date", msg));
            None
        }
    };

    match enrollment_date {
        Some(enrollment_date) if errors.is_empty() => Ok(StudentChanges {
            last_name: form.last_name.trim().to_string(),
            first_mid_name: form.first_mid_name.trim().to_string(),
            enrollment_date,
        }),
        _ => Err(errors),
    }
}

/// 校验课程表单，全部通过时返回可写入的字段
pub fn validate_course_form(form: &CourseForm) -> Result<CourseChanges, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_course_title(&form.title) {
        errors.push(FieldError::new("title", msg));
    }
    let credits = validate_credits(&form.credits)
        .map_err(|msg| errors.push(FieldError::new("credits", msg)))
        .ok();
    let department_id = validate_department_id(&form.department_id)
        .map_err(|msg| errors.push(FieldError::new("department_id", msg)))
        .ok();

    match (credits, department_id) {
        (Some(credits), Some(department_id)) if errors.is_empty() => Ok(CourseChanges {
            title: form.title.trim().to_string(),
            credits,
            department_id,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_multiplier() {
        assert_eq!(validate_multiplier("2"), Ok(2));
        assert_eq!(validate_multiplier(" 10 "), Ok(10));
        assert!(validate_multiplier("0").is_err());
        assert!(validate_multiplier("-3").is_err());
        assert!(validate_multiplier("abc").is_err());
        assert!(validate_multiplier("1.5").is_err());
    }

    fn student_form(last: &str, first: &str, date: &str) -> StudentForm {
        StudentForm {
            last_name: last.to_string(),
            first_mid_name: first.to_string(),
            enrollment_date: date.to_string(),
        }
    }

    #[test]
    fn test_valid_student_form() {
        let changes = validate_student_form(&student_form(" Alexander ", "Carson", "2019-09-01"))
            .expect("form should be valid");
        assert_eq!(changes.last_name, "Alexander");
        assert_eq!(
            changes.enrollment_date,
            NaiveDate::from_ymd_opt(2019, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_person_names() {
        assert!(validate_person_name("O'Brien").is_ok());
        assert!(validate_person_name("Meredith Ann").is_ok());
        assert!(validate_person_name("Núñez").is_ok());
        assert!(validate_person_name("").is_err());
        assert!(validate_person_name("   ").is_err());
        assert!(validate_person_name("9lives").is_err());
        assert!(validate_person_name(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_missing_fields_reported_individually() {
        let errors = validate_student_form(&student_form("", "Carson", "")).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["last_name", "enrollment_date"]);
    }

    #[test]
    fn test_enrollment_date_rules() {
        assert!(validate_enrollment_date("2005-09-01").is_ok());
        assert!(validate_enrollment_date("09/01/2005").is_err());
        assert!(validate_enrollment_date("2005-02-30").is_err());
        assert!(validate_enrollment_date("1700-01-01").is_err());
    }

    #[test]
    fn test_course_form() {
        let form = CourseForm {
            title: "Chemistry".into(),
            credits: "3".into(),
            department_id: "2".into(),
        };
        let changes = validate_course_form(&form).expect("form should be valid");
        assert_eq!(changes.credits, 3);
        assert_eq!(changes.department_id, 2);
    }

    #[test]
    fn test_course_form_errors() {
        let form = CourseForm {
            title: "Ch".into(),
            credits: "6".into(),
            department_id: "".into(),
        };
        let errors = validate_course_form(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "credits", "department_id"]);

        assert!(validate_credits("abc").is_err());
        assert!(validate_credits("-1").is_err());
        assert_eq!(validate_credits(" 0 "), Ok(0));
        assert!(validate_department_id("0").is_err());
    }
}
