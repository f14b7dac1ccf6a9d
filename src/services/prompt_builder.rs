//! 提示词构建 - 业务能力层
//!
//! 只负责把"文本 + 模式"拼成发送给模型的指令

use crate::models::Mode;

/// 固定的系统指令
///
/// 模型的检测/改写行为全部由这段文字约定，按外部契约原样保留。
pub const SYSTEM_INSTRUCTION: &str = include_str!("../../prompts/system_instruction.txt");

/// 构建用户提示词：`"<MODE>: <text>"`
///
/// 不做任何转义，调用方需保证 `text` 去空白后非空。
pub fn build_prompt(text: &str, mode: Mode) -> String {
    format!("{}: {}", mode.tag(), text)
}
