//! 表单与查询字符串的反序列化辅助
//!
//! 浏览器提交空输入框时会带上 `name=`，这里统一把空值和纯空白值当作未提供。

use serde::{Deserialize, Deserializer, de::Error};
use std::fmt::Display;
use std::str::FromStr;

/// 空字符串视为 None，其余原样保留
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// 空字符串视为 None，否则去掉首尾空白后解析
pub fn empty_as_none_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid value '{s}': {e}"))),
        _ => Ok(None),
    }
}
