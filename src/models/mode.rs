//! 处理模式

/// 处理模式
///
/// 每次请求选定一次，请求期间不可变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// 只检测
    #[default]
    Check,
    /// 只改写
    Humanize,
    /// 先检测再改写
    Both,
}

/// 采样参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
}

impl Mode {
    /// 全部模式，按界面顺序排列
    pub const ALL: [Mode; 3] = [Mode::Check, Mode::Humanize, Mode::Both];

    /// 提示词中使用的模式标签
    pub fn tag(self) -> &'static str {
        match self {
            Mode::Check => "CHECK",
            Mode::Humanize => "HUMANIZE",
            Mode::Both => "BOTH",
        }
    }

    /// 标签页名称
    pub fn label(self) -> &'static str {
        match self {
            Mode::Check => "AI Checker",
            Mode::Humanize => "AI Humanizer",
            Mode::Both => "Full Scan",
        }
    }

    /// 输入框占位文字
    pub fn placeholder(self) -> &'static str {
        match self {
            Mode::Check => "Paste your text here to analyze for AI patterns...",
            Mode::Humanize => "Paste AI-generated text here to rewrite it naturally...",
            Mode::Both => "Paste text to check score and fix it in one go...",
        }
    }

    /// 提交按钮文字
    pub fn button_text(self) -> &'static str {
        match self {
            Mode::Check => "Analyze Content",
            Mode::Humanize => "Humanize Text",
            Mode::Both => "Check & Fix",
        }
    }

    /// 采样参数
    ///
    /// CHECK 要稳定的 JSON，其余模式尽量提高输出多样性。
    pub fn sampling(self) -> SamplingParams {
        match self {
            Mode::Check => SamplingParams {
                temperature: 0.0,
                top_p: 0.95,
            },
            Mode::Humanize | Mode::Both => SamplingParams {
                temperature: 1.3,
                top_p: 0.99,
            },
        }
    }

    /// 下一个模式（循环）
    pub fn next(self) -> Self {
        match self {
            Mode::Check => Mode::Humanize,
            Mode::Humanize => Mode::Both,
            Mode::Both => Mode::Check,
        }
    }

    /// 上一个模式（循环）
    pub fn prev(self) -> Self {
        match self {
            Mode::Check => Mode::Both,
            Mode::Humanize => Mode::Check,
            Mode::Both => Mode::Humanize,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CHECK" => Ok(Mode::Check),
            "HUMANIZE" => Ok(Mode::Humanize),
            "BOTH" => Ok(Mode::Both),
            other => Err(format!("未知模式: {}", other)),
        }
    }
}
