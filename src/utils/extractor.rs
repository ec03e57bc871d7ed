//! 安全的路径参数提取器
//!
//! 路径中的 id 缺失、非数字或非正数时直接返回 404，
//! 与“记录不存在”的处理保持一致。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径参数 `{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeIdI64(pub i64);

impl SafeIdI64 {
    fn parse(raw: Option<&str>) -> Option<i64> {
        raw.and_then(|s| s.parse::<i64>().ok()).filter(|id| *id > 0)
    }
}

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match Self::parse(req.match_info().get("id")) {
            Some(id) => Ok(SafeIdI64(id)),
            None => Err(InternalError::from_response(
                "invalid id",
                HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::NotFound,
                    "Resource not found",
                )),
            )
            .into()),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(SafeIdI64::parse(Some("42")), Some(42));
        assert_eq!(SafeIdI64::parse(Some("0")), None);
        assert_eq!(SafeIdI64::parse(Some("-3")), None);
        assert_eq!(SafeIdI64::parse(Some("abc")), None);
        assert_eq!(SafeIdI64::parse(None), None);
    }
}
