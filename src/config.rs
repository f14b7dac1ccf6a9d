/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件（终端界面占用 stdout，日志只写文件）
    pub output_log_file: String,
    // --- LLM 配置 ---
    /// API 密钥，缺失时每次请求都会返回配置错误
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            output_log_file: "ai_detector.log".to_string(),
            llm_api_key: None,
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            llm_api_key: non_blank_var("API_KEY").or_else(|| non_blank_var("LLM_API_KEY")),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
        }
    }

    /// 使用指定密钥（测试和嵌入场景）
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        self.llm_api_key = Some(api_key).filter(|k| !k.trim().is_empty());
        self
    }

    /// 是否已配置 API 密钥
    pub fn has_api_key(&self) -> bool {
        self.llm_api_key.is_some()
    }
}

/// 读取环境变量，空白值视为不存在
fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
