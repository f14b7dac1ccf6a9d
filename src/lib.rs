//! # AI Detector
//!
//! 一个把文本交给外部大模型做 AI 检测和"人性化"改写的终端应用
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 模式、检测结果、处理结果，只描述数据
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次请求
//! - `prompt_builder` - 拼接提示词，内嵌固定的系统指令
//! - `response_parser` - 解析模型输出（CHECK 硬失败，BOTH 软失败）
//! - `LlmService` - 调用 OpenAI 兼容接口
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整处理流程
//! - `TextFlow` - 检查密钥 → 构建提示词 → 调用模型 → 解析
//!
//! ### ④ 展示层（State + TUI）
//! - `state` - 应用状态与纯函数状态推进
//! - `tui/` - 终端界面，执行请求与剪贴板副作用
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod state;
pub mod tui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnalysisResult, AnalysisSignals, Mode, ProcessResult};
pub use services::{build_prompt, parse_response, LlmService, TextGenerator};
pub use state::{reduce, AppEvent, AppState, Effect};
pub use workflow::TextFlow;
