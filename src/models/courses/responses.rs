use serde::Serialize;
use ts_rs::TS;

use super::entities::CourseWithDepartment;
use super::requests::CourseForm;
use crate::models::{FieldError, SelectOption, departments::entities::Department};

// 课程列表页视图模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseIndexViewModel {
    pub courses: Vec<CourseWithDepartment>,
}

// 新建/编辑表单视图模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseFormViewModel {
    // 新建时为空
    pub id: Option<i64>,
    pub course: CourseForm,
    // 院系下拉列表，按名称排序
    pub departments: Vec<SelectOption>,
    pub errors: Vec<FieldError>,
}

// 删除确认页视图模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseDeleteViewModel {
    pub course: CourseWithDepartment,
    pub error_message: Option<String>,
}

// 批量调整学分页视图模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "course.ts")]
pub struct CourseCreditsViewModel {
    // 未执行更新时为空
    pub rows_affected: Option<u64>,
    pub errors: Vec<FieldError>,
}

/// 构建院系下拉列表，departments 需已按名称排序
pub fn department_picklist(departments: Vec<Department>, selected: Option<i64>) -> Vec<SelectOption> {
    departments
        .into_iter()
        .map(|d| SelectOption {
            selected: Some(d.id) == selected,
            value: d.id,
            text: d.name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_picklist_marks_selected() {
        let departments = vec![
            Department {
                id: 2,
                name: "Economics".into(),
            },
            Department {
                id: 1,
                name: "English".into(),
            },
        ];
        let options = department_picklist(departments, Some(1));
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].text, "Economics");
        assert!(!options[0].selected);
        assert!(options[1].selected);
    }

    #[test]
    fn test_department_picklist_without_selection() {
        let departments = vec![Department {
            id: 3,
            name: "Mathematics".into(),
        }];
        let options = department_picklist(departments, None);
        assert!(options.iter().all(|o| !o.selected));
    }
}
