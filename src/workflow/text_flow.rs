//! 文本处理流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整处理流程
//!
//! 流程顺序：
//! 1. 检查密钥（缺失直接失败，不发请求）
//! 2. 构建提示词
//! 3. 调用模型（只调用一次，不重试）
//! 4. 按模式解析响应

use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Mode, ProcessResult};
use crate::services::{
    build_prompt, parse_response, GenerationRequest, LlmService, TextGenerator,
    SYSTEM_INSTRUCTION,
};
use crate::utils::logging::truncate_text;

/// 文本处理流程
///
/// - 编排一次提交的完整流程
/// - 只依赖业务能力（services）
/// - 不持有界面状态
pub struct TextFlow<G = LlmService> {
    generator: G,
    has_api_key: bool,
    verbose_logging: bool,
}

impl TextFlow<LlmService> {
    /// 使用真实 LLM 服务创建流程
    pub fn new(config: &Config) -> Self {
        Self::with_generator(config, LlmService::new(config))
    }
}

impl<G: TextGenerator> TextFlow<G> {
    /// 使用自定义生成器创建流程
    pub fn with_generator(config: &Config, generator: G) -> Self {
        Self {
            generator,
            has_api_key: config.has_api_key(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 底层生成器
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// 处理一次提交
    pub async fn process(&self, text: &str, mode: Mode) -> AppResult<ProcessResult> {
        if !self.has_api_key {
            error!("❌ 未配置 API 密钥，请求未发出");
            return Err(AppError::Configuration);
        }

        if text.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }

        info!("🔍 开始处理，模式: {}，输入 {} 字符", mode, text.chars().count());

        let request = GenerationRequest {
            prompt: build_prompt(text, mode),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            sampling: mode.sampling(),
        };

        let raw = self
            .generator
            .generate(&request)
            .await
            .inspect_err(|e| error!("❌ 请求失败: {}", e))?
            .filter(|raw| !raw.trim().is_empty())
            .ok_or_else(|| {
                error!("❌ 模型返回内容为空");
                AppError::EmptyResponse
            })?;

        if self.verbose_logging {
            info!("模型原始输出: {}", truncate_text(&raw, 500));
        }

        let result = parse_response(&raw, mode)?;

        info!(
            "✓ 处理完成: 检测结果 {}，改写文本 {}",
            if result.analysis.is_some() { "有" } else { "无" },
            if result.humanized_text.is_some() { "有" } else { "无" }
        );

        Ok(result)
    }
}

/// 在线程间共享的流程
pub type SharedFlow<G = LlmService> = Arc<TextFlow<G>>;
