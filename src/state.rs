//! 应用状态
//!
//! 所有界面状态集中在 [`AppState`]，由纯函数 [`reduce`] 推进。
//! 需要与外界交互的动作（发请求、写剪贴板）以 [`Effect`] 形式交给调用方执行。

use tracing::{debug, info, warn};

use crate::models::{Mode, ProcessResult};

/// 应用状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// 输入文本
    pub input: String,
    /// 当前模式
    pub mode: Mode,
    /// 是否有请求在进行中
    pub loading: bool,
    /// 最近一次结果
    pub result: Option<ProcessResult>,
    /// 最近一次错误
    pub error: Option<String>,
    /// 改写文本是否刚被复制
    pub copied: bool,
    /// 是否退出
    pub should_quit: bool,
}

/// 状态事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    InputChar(char),
    Newline,
    Backspace,
    /// 粘贴内容追加到输入末尾
    Paste(String),
    Clear,
    SelectMode(Mode),
    NextMode,
    PrevMode,
    Submit,
    /// 请求完成，`mode` 为发起请求时的模式
    Completed {
        mode: Mode,
        outcome: Result<ProcessResult, String>,
    },
    CopyRewritten,
    UseRewritten,
    Quit,
}

/// 需要调用方执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 发起一次处理请求
    Process { text: String, mode: Mode },
    /// 写入剪贴板
    CopyToClipboard(String),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 输入去空白后是否为空
    pub fn is_input_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// 当前能否提交
    pub fn can_submit(&self) -> bool {
        !self.is_input_empty() && !self.loading
    }

    /// 输入的单词数
    pub fn word_count(&self) -> usize {
        self.input.split_whitespace().count()
    }

    /// 当前结果中的改写文本
    pub fn humanized_text(&self) -> Option<&str> {
        self.result.as_ref()?.humanized_text.as_deref()
    }

    fn clear_outcome(&mut self) {
        self.result = None;
        self.error = None;
        self.copied = false;
    }

    fn switch_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("切换模式: {} -> {}", self.mode, mode);
            self.mode = mode;
            self.clear_outcome();
        }
    }
}

/// 推进状态
///
/// 返回新的状态，以及需要执行的副作用（如果有）。
pub fn reduce(mut state: AppState, event: AppEvent) -> (AppState, Option<Effect>) {
    let mut effect = None;

    match event {
        AppEvent::InputChar(c) => {
            state.input.push(c);
            state.copied = false;
        }
        AppEvent::Newline => {
            state.input.push('\n');
            state.copied = false;
        }
        AppEvent::Backspace => {
            state.input.pop();
            state.copied = false;
        }
        AppEvent::Paste(text) => {
            state.input.push_str(&text);
            state.copied = false;
        }
        AppEvent::Clear => {
            state.input.clear();
            state.clear_outcome();
        }
        AppEvent::SelectMode(mode) => state.switch_mode(mode),
        AppEvent::NextMode => {
            let mode = state.mode.next();
            state.switch_mode(mode);
        }
        AppEvent::PrevMode => {
            let mode = state.mode.prev();
            state.switch_mode(mode);
        }
        AppEvent::Submit => {
            if state.can_submit() {
                state.loading = true;
                state.clear_outcome();
                effect = Some(Effect::Process {
                    text: state.input.clone(),
                    mode: state.mode,
                });
            } else {
                debug!("忽略提交: 输入为空或已有请求进行中");
            }
        }
        AppEvent::Completed { mode, outcome } => {
            state.loading = false;
            if mode != state.mode {
                info!("丢弃过期结果: 请求模式 {}，当前模式 {}", mode, state.mode);
            } else {
                match outcome {
                    Ok(result) => state.result = Some(result),
                    Err(message) => {
                        warn!("请求失败: {}", message);
                        state.error = Some(message);
                    }
                }
            }
        }
        AppEvent::CopyRewritten => {
            if let Some(text) = state.humanized_text() {
                effect = Some(Effect::CopyToClipboard(text.to_string()));
                state.copied = true;
            }
        }
        AppEvent::UseRewritten => {
            if let Some(text) = state.humanized_text().map(str::to_string) {
                state.input = text;
                state.copied = false;
                if state.mode == Mode::Humanize {
                    state.switch_mode(Mode::Check);
                }
            }
        }
        AppEvent::Quit => state.should_quit = true,
    }

    (state, effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisResult;

    fn typed(text: &str) -> AppState {
        AppState {
            input: text.to_string(),
            ..AppState::new()
        }
    }

    fn humanized(mode: Mode, text: &str) -> ProcessResult {
        ProcessResult {
            humanized_text: Some(text.to_string()),
            ..ProcessResult::new(mode)
        }
    }

    fn analysed(mode: Mode) -> ProcessResult {
        ProcessResult {
            analysis: Some(AnalysisResult::default()),
            ..ProcessResult::new(mode)
        }
    }

    #[test]
    fn test_submit_with_blank_input_emits_nothing() {
        for input in ["", "   ", "\n\t"] {
            let (state, effect) = reduce(typed(input), AppEvent::Submit);
            assert!(effect.is_none());
            assert!(!state.loading);
        }
    }

    #[test]
    fn test_submit_emits_process_and_sets_loading() {
        let mut state = typed("The sky is blue.");
        state.error = Some("old".to_string());

        let (state, effect) = reduce(state, AppEvent::Submit);

        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(
            effect,
            Some(Effect::Process {
                text: "The sky is blue.".to_string(),
                mode: Mode::Check
            })
        );
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let (state, _) = reduce(typed("text"), AppEvent::Submit);
        let (state, effect) = reduce(state, AppEvent::Submit);
        assert!(effect.is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_completion_stores_result_and_resets_loading() {
        let (state, _) = reduce(typed("text"), AppEvent::Submit);
        let (state, _) = reduce(
            state,
            AppEvent::Completed {
                mode: Mode::Check,
                outcome: Ok(analysed(Mode::Check)),
            },
        );
        assert!(!state.loading);
        assert!(state.result.unwrap().analysis.is_some());
    }

    #[test]
    fn test_failure_stores_message() {
        let (state, _) = reduce(typed("text"), AppEvent::Submit);
        let (state, _) = reduce(
            state,
            AppEvent::Completed {
                mode: Mode::Check,
                outcome: Err("API Key is missing in environment variables.".to_string()),
            },
        );
        assert!(!state.loading);
        assert!(state.result.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("API Key is missing in environment variables.")
        );
        assert!(state.can_submit());
    }

    #[test]
    fn test_switching_mode_clears_result_and_error() {
        let state = AppState {
            result: Some(analysed(Mode::Check)),
            error: Some("boom".to_string()),
            ..typed("text")
        };

        let (state, effect) = reduce(state, AppEvent::SelectMode(Mode::Both));
        assert!(effect.is_none());
        assert_eq!(state.mode, Mode::Both);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert_eq!(state.input, "text");
    }

    #[test]
    fn test_cycling_modes_clears_result() {
        let state = AppState {
            result: Some(analysed(Mode::Check)),
            ..AppState::new()
        };
        let (state, _) = reduce(state, AppEvent::NextMode);
        assert_eq!(state.mode, Mode::Humanize);
        assert!(state.result.is_none());

        let (state, _) = reduce(state, AppEvent::PrevMode);
        assert_eq!(state.mode, Mode::Check);
    }

    #[test]
    fn test_selecting_same_mode_keeps_result() {
        let state = AppState {
            result: Some(analysed(Mode::Check)),
            ..AppState::new()
        };
        let (state, _) = reduce(state, AppEvent::SelectMode(Mode::Check));
        assert!(state.result.is_some());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let (state, _) = reduce(typed("text"), AppEvent::Submit);
        let (state, _) = reduce(state, AppEvent::SelectMode(Mode::Humanize));
        let (state, _) = reduce(
            state,
            AppEvent::Completed {
                mode: Mode::Check,
                outcome: Ok(analysed(Mode::Check)),
            },
        );
        assert!(!state.loading);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_clear_empties_input_and_outcome() {
        let state = AppState {
            result: Some(analysed(Mode::Check)),
            error: Some("x".to_string()),
            ..typed("text")
        };
        let (state, _) = reduce(state, AppEvent::Clear);
        assert!(state.input.is_empty());
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_editing_and_paste() {
        let (state, _) = reduce(typed("ab"), AppEvent::Backspace);
        let (state, _) = reduce(state, AppEvent::InputChar('c'));
        let (state, _) = reduce(state, AppEvent::Newline);
        let (state, _) = reduce(state, AppEvent::Paste("pasted words".to_string()));
        assert_eq!(state.input, "ac\npasted words");
        assert_eq!(state.word_count(), 3);
    }

    #[test]
    fn test_copy_rewritten_emits_clipboard_effect() {
        let state = AppState {
            mode: Mode::Humanize,
            result: Some(humanized(Mode::Humanize, "Plain words.")),
            ..AppState::new()
        };
        let (state, effect) = reduce(state, AppEvent::CopyRewritten);
        assert_eq!(
            effect,
            Some(Effect::CopyToClipboard("Plain words.".to_string()))
        );
        assert!(state.copied);

        let (state, _) = reduce(state, AppEvent::InputChar('x'));
        assert!(!state.copied);
    }

    #[test]
    fn test_copy_without_rewrite_does_nothing() {
        let state = AppState {
            result: Some(analysed(Mode::Check)),
            ..AppState::new()
        };
        let (state, effect) = reduce(state, AppEvent::CopyRewritten);
        assert!(effect.is_none());
        assert!(!state.copied);
    }

    #[test]
    fn test_use_rewritten_in_humanize_switches_to_check() {
        let state = AppState {
            mode: Mode::Humanize,
            result: Some(humanized(Mode::Humanize, "Rewritten.")),
            ..typed("original")
        };
        let (state, _) = reduce(state, AppEvent::UseRewritten);
        assert_eq!(state.input, "Rewritten.");
        assert_eq!(state.mode, Mode::Check);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_use_rewritten_in_both_keeps_mode() {
        let state = AppState {
            mode: Mode::Both,
            result: Some(humanized(Mode::Both, "Rewritten.")),
            ..typed("original")
        };
        let (state, _) = reduce(state, AppEvent::UseRewritten);
        assert_eq!(state.input, "Rewritten.");
        assert_eq!(state.mode, Mode::Both);
        assert!(state.result.is_some());
    }

    #[test]
    fn test_quit_sets_flag() {
        let (state, _) = reduce(AppState::new(), AppEvent::Quit);
        assert!(state.should_quit);
    }
}
