//! 界面渲染
//!
//! 只读 [`AppState`]，不修改任何状态。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::models::{AnalysisResult, Mode};
use crate::state::AppState;

const HIGH_AI_COLOR: Color = Color::LightRed;
const HUMAN_COLOR: Color = Color::Green;
const MUTED: Color = Color::DarkGray;

/// 渲染整个界面
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // 标题
        Constraint::Length(3), // 模式
        Constraint::Min(6),    // 输入框
        Constraint::Length(1), // 错误
        Constraint::Length(1), // 提交按钮
        Constraint::Percentage(50), // 结果
        Constraint::Length(1), // 快捷键
    ])
    .split(frame.area());

    frame.render_widget(header(), chunks[0]);
    frame.render_widget(mode_tabs(state.mode), chunks[1]);
    frame.render_widget(input_box(state), chunks[2]);
    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(format!("⚠ {}", error))
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[3],
        );
    }
    frame.render_widget(submit_button(state), chunks[4]);
    render_result(frame, chunks[5], state);
    frame.render_widget(footer(), chunks[6]);
}

fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "TRUSTED GPT-5, CHATGPT AND AI DETECTOR",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "The most advanced and reliable AI content analysis tool",
            Style::default().fg(MUTED),
        )),
    ])
    .alignment(Alignment::Center)
}

fn mode_tabs(active: Mode) -> Tabs<'static> {
    let titles: Vec<Line> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| Line::from(format!("F{} {}", i + 1, mode.label())))
        .collect();
    let selected = Mode::ALL.iter().position(|m| *m == active).unwrap_or(0);

    Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(" Mode "))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
        )
}

fn input_box(state: &AppState) -> Paragraph<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Input ")
        .title_bottom(Line::from(format!(" {} Words ", state.word_count())).right_aligned());

    if state.input.is_empty() {
        Paragraph::new(Span::styled(state.mode.placeholder(), Style::default().fg(MUTED)))
            .block(block)
            .wrap(Wrap { trim: false })
    } else {
        let mut text = state.input.clone();
        text.push('▏');
        Paragraph::new(text).block(block).wrap(Wrap { trim: false })
    }
}

fn submit_button(state: &AppState) -> Paragraph<'static> {
    let (label, style) = if state.loading {
        (
            "⏳ Processing...".to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else if state.is_input_empty() {
        (
            format!("[ Ctrl+S  {} ]", state.mode.button_text()),
            Style::default().fg(MUTED),
        )
    } else {
        (
            format!("[ Ctrl+S  {} ]", state.mode.button_text()),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    Paragraph::new(label.to_uppercase())
        .style(style)
        .alignment(Alignment::Center)
}

fn render_result(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(result) = &state.result else {
        return;
    };

    match (&result.analysis, &result.humanized_text) {
        (Some(analysis), Some(text)) => {
            let halves =
                Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(area);
            render_analysis(frame, halves[0], analysis);
            frame.render_widget(humanized_panel(text, state.copied), halves[1]);
        }
        (Some(analysis), None) => render_analysis(frame, area, analysis),
        (None, Some(text)) => frame.render_widget(humanized_panel(text, state.copied), area),
        (None, None) => frame.render_widget(
            Paragraph::new("No analysis or rewritten text was returned.")
                .style(Style::default().fg(MUTED))
                .block(Block::default().borders(Borders::ALL).title(" Result ")),
            area,
        ),
    }
}

fn render_analysis(frame: &mut Frame, area: Rect, analysis: &AnalysisResult) {
    let accent = if analysis.is_high_ai() {
        HIGH_AI_COLOR
    } else {
        HUMAN_COLOR
    };
    let badge = if analysis.is_high_ai() {
        "AI Pattern Detected"
    } else {
        "Human Written"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" Analysis Complete · {} ", badge),
            Style::default().fg(accent),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Min(2),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .split(inner);

    let verdict = Paragraph::new(vec![
        Line::from(Span::styled(
            analysis.overall_verdict.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            analysis.reasoning.clone(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(verdict, rows[0]);

    if let Some(score) = analysis.ai_score() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent))
            .percent(score.clamp(0, 100) as u16)
            .label(match analysis.human_score() {
                Some(human) => format!("{}% AI Score · {}% Human", score, human),
                None => format!("{}% AI Score", score),
            });
        frame.render_widget(gauge, rows[1]);
    } else {
        frame.render_widget(
            Paragraph::new(format!("AI Score: {}", analysis.ai_probability))
                .style(Style::default().fg(MUTED)),
            rows[1],
        );
    }

    frame.render_widget(signal_lines(analysis), rows[2]);
}

fn signal_lines(analysis: &AnalysisResult) -> Paragraph<'static> {
    let signals = &analysis.signals_detected;
    let repetition_color = if signals.is_repetitive() {
        HIGH_AI_COLOR
    } else {
        HUMAN_COLOR
    };
    let label = Style::default().fg(MUTED);

    let first = Line::from(vec![
        Span::styled("Perplexity ", label),
        Span::raw(signals.perplexity.clone()),
        Span::styled("  Burstiness ", label),
        Span::raw(signals.burstiness.clone()),
        Span::styled("  Pattern Repetition ", label),
        Span::styled(
            signals.repetitiveness.clone(),
            Style::default().fg(repetition_color),
        ),
        Span::styled("  Grammar Uniformity ", label),
        Span::raw(signals.grammar_uniformity.clone()),
    ]);

    let markers = if signals.tonal_markers.is_empty() {
        "none".to_string()
    } else {
        signals.tonal_markers.join(", ")
    };
    let second = Line::from(vec![
        Span::styled("Tonal Markers ", label),
        Span::raw(markers),
    ]);

    Paragraph::new(vec![first, second]).wrap(Wrap { trim: true })
}

fn humanized_panel(text: &str, copied: bool) -> Paragraph<'_> {
    let actions = if copied {
        " Ctrl+R Replace Input · ✓ Copied "
    } else {
        " Ctrl+R Replace Input · Ctrl+Y Copy "
    };

    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " ✦ Humanized Result ",
                    Style::default().fg(HUMAN_COLOR).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(actions).right_aligned()),
        )
        .wrap(Wrap { trim: false })
}

fn footer() -> Paragraph<'static> {
    Paragraph::new(
        "Ctrl+S submit · Tab/F1-F3 mode · Ctrl+L clear · Ctrl+Y copy · Ctrl+R use rewrite · Esc quit",
    )
    .style(Style::default().fg(MUTED))
    .alignment(Alignment::Center)
}
