//! 终端界面 - 展示层
//!
//! 事件循环同时等待三类输入：
//! - 终端事件（按键 / 粘贴）
//! - 后台请求的完成通知
//! - 渲染节拍
//!
//! 状态变化全部交给 [`crate::state::reduce`]，这里只负责执行副作用。

pub mod input;
pub mod view;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    clipboard::CopyToClipboard,
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use scopeguard::defer;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use crate::config::Config;
use crate::services::TextGenerator;
use crate::state::{reduce, AppEvent, AppState, Effect};
use crate::workflow::{SharedFlow, TextFlow};

/// 使用真实 LLM 服务运行界面
pub async fn run(config: &Config) -> Result<()> {
    run_with_flow(Arc::new(TextFlow::new(config))).await
}

/// 使用指定流程运行界面
pub async fn run_with_flow<G: TextGenerator + 'static>(flow: SharedFlow<G>) -> Result<()> {
    enable_raw_mode()?;
    // 进入 raw 模式后立即注册，后续任何初始化失败或 panic 都会恢复终端
    defer! {
        restore_terminal();
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let (completed_tx, mut completed_rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut events = EventStream::new();
    let mut render_tick = interval(Duration::from_millis(33));
    let mut state = AppState::new();

    info!("终端界面已启动");

    loop {
        let event = tokio::select! {
            biased;

            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => input::map_event(&event),
                Some(Err(e)) => {
                    warn!("终端事件读取失败: {}", e);
                    None
                }
                None => break,
            },

            Some(event) = completed_rx.recv() => Some(event),

            _ = render_tick.tick() => {
                terminal.draw(|f| view::render(f, &state))?;
                None
            }
        };

        let Some(event) = event else {
            continue;
        };

        let (next, effect) = reduce(state, event);
        state = next;

        if let Some(effect) = effect {
            run_effect(effect, &flow, &completed_tx);
        }

        if state.should_quit {
            info!("用户退出");
            break;
        }
    }

    Ok(())
}

/// 恢复终端：退出 raw 模式与备用屏幕，关闭括号粘贴
///
/// 各步骤互不依赖，未进入过的状态也可以安全退出，因此可以重复调用。
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen, Show);
}

/// 执行副作用
fn run_effect<G: TextGenerator + 'static>(
    effect: Effect,
    flow: &SharedFlow<G>,
    completed_tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match effect {
        Effect::Process { text, mode } => {
            let flow = Arc::clone(flow);
            let tx = completed_tx.clone();
            tokio::spawn(async move {
                let outcome = flow.process(&text, mode).await.map_err(|e| e.to_string());
                if tx.send(AppEvent::Completed { mode, outcome }).is_err() {
                    warn!("界面已关闭，丢弃处理结果");
                }
            });
        }
        Effect::CopyToClipboard(text) => {
            if let Err(e) = execute!(io::stdout(), CopyToClipboard::to_clipboard_from(text)) {
                warn!("写入剪贴板失败: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_terminal_without_setup_is_safe() {
        // 初始化中途失败时，守卫会在尚未进入备用屏幕的状态下执行
        restore_terminal();
        restore_terminal();
    }
}
