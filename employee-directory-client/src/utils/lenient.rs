//! 宽松的数值反序列化工具
//!
//! 员工服务的字段类型并不稳定：同一字段有时是 JSON 数字，有时是数字字符串。
//! - 反序列化: 数字 或 数字字符串 -> `u32` / `f64`

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
}

/// 反序列化 `u32`：支持整数或整数字符串
pub fn u32_from_any<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::U64(n) => u32::try_from(n).map_err(Error::custom),
        NumberOrString::I64(n) => u32::try_from(n).map_err(Error::custom),
        NumberOrString::F64(n) => Err(Error::custom(format!("expected an integer, got {n}"))),
        NumberOrString::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::custom(format!("Invalid integer '{s}': {e}"))),
    }
}

/// 反序列化 `f64`：支持任意数字或数字字符串
#[allow(clippy::cast_precision_loss)]
pub fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::U64(n) => Ok(n as f64),
        NumberOrString::I64(n) => Ok(n as f64),
        NumberOrString::F64(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::custom(format!("Invalid number '{s}': {e}"))),
    }
}

/// 反序列化可选字符串：空字符串视为 `None`
pub fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
