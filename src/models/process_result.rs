use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;
use super::mode::Mode;

/// 单次请求的处理结果
///
/// CHECK 只有 `analysis`，HUMANIZE 只有 `humanized_text`，BOTH 两者尽力而为。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humanized_text: Option<String>,
}

impl ProcessResult {
    /// 创建空结果
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            analysis: None,
            humanized_text: None,
        }
    }
}
