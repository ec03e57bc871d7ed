use serde::Serialize;
use ts_rs::TS;

// 业务错误码，随 ApiResponse 一起返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    InternalServerError = 1500,

    // 学生
    StudentNotFound = 2001,
    StudentSaveFailed = 2002,

    // 课程
    CourseNotFound = 3001,
    CourseSaveFailed = 3002,
    CourseCreditsInvalid = 3004,
    CourseCreditsUpdateFailed = 3005,

    // 院系
    DepartmentListFailed = 4001,
}
