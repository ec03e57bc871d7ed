use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;
use super::requests::{StudentForm, StudentSortOrder};
use crate::models::{FieldError, PaginatedList, enrollments::entities::EnrollmentWithCourse};

// 学生列表页视图模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentIndexViewModel {
    // 当前排序标记，原样回传
    pub current_sort: String,
    // 点击“姓”列时使用的排序标记
    pub name_sort_parm: String,
    // 点击“入学日期”列时使用的排序标记
    pub date_sort_parm: String,
    // 当前搜索词，翻页时回传
    pub current_filter: String,
    pub students: PaginatedList<Student>,
}

impl StudentIndexViewModel {
    pub fn new(
        sort_token: Option<&str>,
        current_filter: Option<String>,
        students: PaginatedList<Student>,
    ) -> Self {
        let current_sort = sort_token.unwrap_or_default().to_string();
        let name_sort_parm = if current_sort.is_empty() {
            StudentSortOrder::NAME_DESC.to_string()
        } else {
            String::new()
        };
        let date_sort_parm = if current_sort == StudentSortOrder::DATE {
            StudentSortOrder::DATE_DESC.to_string()
        } else {
            StudentSortOrder::DATE.to_string()
        };

        Self {
            current_sort,
            name_sort_parm,
            date_sort_parm,
            current_filter: current_filter.unwrap_or_default(),
            students,
        }
    }
}

// 学生详情：学生 → 选课记录 → 课程
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentDetails {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub enrollments: Vec<EnrollmentWithCourse>,
}

// 新建/编辑表单视图模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentFormViewModel {
    // 新建时为空
    pub id: Option<i64>,
    pub student: StudentForm,
    pub errors: Vec<FieldError>,
}

// 删除确认页视图模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentDeleteViewModel {
    pub student: Student,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_page() -> PaginatedList<Student> {
        PaginatedList::new(Vec::new(), 1, 3, 0)
    }

    #[test]
    fn test_sort_links_for_default_sort() {
        let vm = StudentIndexViewModel::new(None, None, empty_page());
        assert_eq!(vm.current_sort, "");
        assert_eq!(vm.name_sort_parm, "name_desc");
        assert_eq!(vm.date_sort_parm, "Date");
        assert_eq!(vm.current_filter, "");
    }

    #[test]
    fn test_sort_links_toggle() {
        let vm = StudentIndexViewModel::new(Some("name_desc"), None, empty_page());
        assert_eq!(vm.name_sort_parm, "");
        assert_eq!(vm.date_sort_parm, "Date");

        let vm = StudentIndexViewModel::new(Some("Date"), Some("an".into()), empty_page());
        assert_eq!(vm.name_sort_parm, "");
        assert_eq!(vm.date_sort_parm, "date_desc");
        assert_eq!(vm.current_filter, "an");

        let vm = StudentIndexViewModel::new(Some("date_desc"), None, empty_page());
        assert_eq!(vm.date_sort_parm, "Date");
    }
}
