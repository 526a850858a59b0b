//! `.env` 内容解析

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::constants::credentials::PLACEHOLDER_API_KEY;

static API_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GEMINI_API_KEY=(.+)").expect("Invalid API key pattern"));

/// 从 `.env` 文本中提取 API key
///
/// 只看第一处 `GEMINI_API_KEY=` 匹配（单行），取值两端空白会被去掉。
/// 空值和模板占位值都视为未配置，返回 `None`。
pub fn extract_api_key(content: &str) -> Option<String> {
    let captures = API_KEY_PATTERN.captures(content)?;
    let value = captures.get(1)?.as_str().trim();

    if value.is_empty() || is_placeholder(value) {
        return None;
    }
    Some(value.to_string())
}

/// 是否为模板占位值
pub fn is_placeholder(value: &str) -> bool {
    value == PLACEHOLDER_API_KEY
}

/// 模板文件内容
pub fn template_content() -> String {
    format!("GEMINI_API_KEY={}\n", PLACEHOLDER_API_KEY)
}
