//! 工具模块

pub mod datetime;
pub mod log_sanitizer;

use serde::{Deserialize, Deserializer};

/// 反序列化时将 `null` 视为默认值（后端会对空字段返回 null）
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
