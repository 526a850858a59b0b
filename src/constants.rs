//! 全局常量定义

/// 凭据相关常量
pub mod credentials {
    /// `.env` 文件名
    pub const ENV_FILE_NAME: &str = ".env";

    /// API key 的变量名
    pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

    /// 模板中的占位值，读取时视为未配置
    pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";
}

/// LLM 相关常量
pub mod llm {
    /// 默认模型
    pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

    /// 默认 API 地址
    pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
}

/// UI 相关常量
pub mod ui {
    /// 错误预览最大长度
    pub const ERROR_PREVIEW_LENGTH: usize = 500;

    /// 成功提示中展示的 commit hash 长度
    pub const SHORT_HASH_LENGTH: usize = 8;
}
