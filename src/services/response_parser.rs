//! 响应解析 - 业务能力层
//!
//! 把模型的原始输出转换为 [`ProcessResult`]。
//!
//! - CHECK：JSON 解析失败是硬错误
//! - BOTH：JSON 解析失败只记警告，改写文本照常返回

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResult, Mode, ProcessResult};
use crate::utils::logging::truncate_text;

/// BOTH 模式下分隔检测结果与改写文本的字面量
pub const HUMANIZED_DELIMITER: &str = "HUMANIZED VERSION:";

/// 代码块标记：先匹配 ```json，再匹配单独的 ```
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json|```").expect("代码块正则非法"));

/// 解析模型响应
pub fn parse_response(raw: &str, mode: Mode) -> AppResult<ProcessResult> {
    let mut result = ProcessResult::new(mode);

    match mode {
        Mode::Check => {
            let analysis = parse_analysis(raw).inspect_err(|_| {
                warn!("CHECK 响应 JSON 解析失败: {}", truncate_text(raw, 200));
            })?;
            result.analysis = Some(analysis);
        }
        Mode::Humanize => {
            result.humanized_text = Some(raw.trim().to_string());
        }
        Mode::Both => {
            // 只取第一、二个分隔符之间的片段，之后的内容丢弃
            let mut parts = raw.split(HUMANIZED_DELIMITER);
            let analysis_part = parts.next().unwrap_or_default();
            let humanized_part = parts.next();
            if humanized_part.is_none() {
                debug!("BOTH 响应中没有找到分隔符");
            }

            match parse_analysis(analysis_part) {
                Ok(analysis) => result.analysis = Some(analysis),
                Err(e) => warn!("BOTH 模式检测结果解析失败，仅返回改写文本: {}", e),
            }

            result.humanized_text = humanized_part
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string);
        }
    }

    Ok(result)
}

/// 去掉代码块标记后解析检测结果
pub fn parse_analysis(segment: &str) -> AppResult<AnalysisResult> {
    let cleaned = strip_code_fences(segment);
    serde_json::from_str(&cleaned).map_err(|source| AppError::MalformedAnalysis { source })
}

/// 删除所有 ```json / ``` 标记并去掉首尾空白
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}
