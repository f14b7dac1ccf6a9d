//! 应用程序错误类型
//!
//! 请求级错误全部归入 [`AppError`]，界面只展示 `Display` 文本。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 缺少 API 密钥，请求不会发出
    #[error("API Key is missing in environment variables.")]
    Configuration,

    /// 网络或服务端错误，原样展示给用户
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// 服务返回空内容
    #[error("Empty response from AI")]
    EmptyResponse,

    /// CHECK 模式下的 JSON 无法解析
    #[error("Invalid response format from AI")]
    MalformedAnalysis {
        #[source]
        source: serde_json::Error,
    },

    /// 输入为空（界面层已拦截，这里只是兜底）
    #[error("Input text is empty")]
    EmptyInput,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建传输层错误
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Transport {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// 创建仅带消息的传输层错误
    pub fn transport_message(message: impl Into<String>) -> Self {
        AppError::Transport {
            message: message.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedAnalysis { source: err }
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::transport(err)
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            AppError::Configuration.to_string(),
            "API Key is missing in environment variables."
        );
        assert_eq!(AppError::EmptyResponse.to_string(), "Empty response from AI");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            AppError::from(json_err).to_string(),
            "Invalid response format from AI"
        );
    }

    #[test]
    fn test_transport_message_is_verbatim() {
        let err = AppError::transport_message("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert!(std::error::Error::source(&err).is_none());
    }
}
