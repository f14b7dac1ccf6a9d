//! LLM 服务 - 业务能力层
//!
//! 只负责"发一次请求、拿回原始文本"，不关心模式语义
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Gemini 的 OpenAI 兼容端点）

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::SamplingParams;

/// 单次生成请求
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// 用户提示词（`"<MODE>: <text>"`）
    pub prompt: String,
    /// 系统指令
    pub system_instruction: String,
    /// 采样参数
    pub sampling: SamplingParams,
}

/// 文本生成能力
///
/// 流程层只依赖这个 trait，测试时可以换成脚本化的实现。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 发送一次请求，返回模型输出；模型没有给出文本时返回 `None`
    async fn generate(&self, request: &GenerationRequest) -> AppResult<Option<String>>;
}

/// LLM 服务
///
/// 职责：
/// - 调用 OpenAI 兼容的 chat completions 接口
/// - 只发一次请求，不重试
/// - 不解析响应内容
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// 创建新的 LLM 服务
    ///
    /// 密钥缺失时仍可创建，请求前由流程层拦截。
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.llm_api_key.as_deref().unwrap_or_default())
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 构建消息列表：系统指令 + 用户提示词
    fn build_messages(
        &self,
        request: &GenerationRequest,
    ) -> AppResult<Vec<ChatCompletionRequestMessage>> {
        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system_instruction.as_str())
            .build()?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt.as_str())
            .build()?;

        Ok(vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ])
    }
}

#[async_trait]
impl TextGenerator for LlmService {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<Option<String>> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!(
            "提示词长度: {} 字符, temperature: {}, top_p: {}",
            request.prompt.len(),
            request.sampling.temperature,
            request.sampling.top_p
        );

        let messages = self.build_messages(request)?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(request.sampling.temperature)
            .top_p(request.sampling.top_p)
            .build()?;

        let response = self.client.chat().create(chat_request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            AppError::transport(e)
        })?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone());

        Ok(content)
    }
}
