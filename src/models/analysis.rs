//! 检测结果数据结构
//!
//! 字段全部由外部模型给出，这里只负责解析，不做取值校验。
//! 缺失字段、`null` 和类型不符的字段都按宽松规则转换，只要是 JSON 对象就能解析。

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 检测信号
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSignals {
    /// 困惑度（high/low）
    #[serde(deserialize_with = "lenient_label")]
    pub perplexity: String,
    /// 突发度（high/low）
    #[serde(deserialize_with = "lenient_label")]
    pub burstiness: String,
    /// 是否重复（yes/no）
    #[serde(deserialize_with = "lenient_label")]
    pub repetitiveness: String,
    /// 语气标记
    #[serde(deserialize_with = "lenient_labels")]
    pub tonal_markers: Vec<String>,
    /// 语法一致性（high/low）
    #[serde(deserialize_with = "lenient_label")]
    pub grammar_uniformity: String,
}

impl AnalysisSignals {
    /// 重复度标签是否包含 "yes"
    pub fn is_repetitive(&self) -> bool {
        self.repetitiveness.to_lowercase().contains("yes")
    }
}

/// 检测结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// AI 概率，形如 "80%"
    #[serde(deserialize_with = "lenient_label")]
    pub ai_probability: String,
    /// 人工概率，形如 "20%"，不要求与 AI 概率之和为 100
    #[serde(deserialize_with = "lenient_label")]
    pub human_probability: String,
    #[serde(deserialize_with = "lenient_label")]
    pub overall_verdict: String,
    #[serde(deserialize_with = "lenient_signals")]
    pub signals_detected: AnalysisSignals,
    #[serde(deserialize_with = "lenient_label")]
    pub reasoning: String,
}

impl AnalysisResult {
    /// AI 分数（仅用于展示）
    pub fn ai_score(&self) -> Option<i64> {
        parse_leading_int(&self.ai_probability)
    }

    /// 人工分数（仅用于展示）
    pub fn human_score(&self) -> Option<i64> {
        parse_leading_int(&self.human_probability)
    }

    /// AI 分数是否超过 50
    pub fn is_high_ai(&self) -> bool {
        self.ai_score().is_some_and(|score| score > 50)
    }
}

// ========== 宽松反序列化 ==========

/// 把任意 JSON 值转成展示用文本：`null` 为空，字符串原样，其余取 JSON 文本
fn value_to_label(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn lenient_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_label)
}

/// 数组逐项转文本，`null` 为空列表，单个标量视为只有一项
fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(value_to_label).collect(),
        other => vec![value_to_label(other)],
    })
}

/// 不是对象的信号字段按空信号处理
fn lenient_signals<'de, D>(deserializer: D) -> Result<AnalysisSignals, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => {
            AnalysisSignals::deserialize(object).map_err(de::Error::custom)
        }
        _ => Ok(AnalysisSignals::default()),
    }
}

/// 宽松的整数解析：去掉 `%`，跳过前导空白，读取开头的数字，忽略其余内容
fn parse_leading_int(value: &str) -> Option<i64> {
    let cleaned = value.replace('%', "");
    let trimmed = cleaned.trim_start();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let number = digits.parse::<i64>().ok()?;
    Some(if negative { -number } else { number })
}
