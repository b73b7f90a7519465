//! 单个视图的渲染

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{PanelKind, View};

use super::theme::{colors, Styles};

/// 渲染一个视图
///
/// 视图可能超出屏幕（终端刚缩小时），先裁剪到屏幕内。
pub fn render(frame: &mut Frame, view: &View, focused: bool) {
    let area = Rect::from(view.region).intersection(frame.area());
    if area.is_empty() {
        return;
    }
    frame.render_widget(Clear, area);

    let kind = PanelKind::from_name(view.name());
    if kind == Some(PanelKind::Navigate) {
        render_navigate(frame, view, area);
        return;
    }

    let c = colors();
    let border_style = match kind {
        Some(PanelKind::ErrorMessage) => Style::default().fg(c.error),
        Some(PanelKind::State) => Style::default().fg(c.warning),
        _ if focused => Styles::border_focused(),
        _ => Styles::border(),
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(c.bg).fg(c.fg));
    if !view.title.is_empty() {
        block = block.title(Span::styled(format!(" {} ", view.title), Styles::title()));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.wrap {
        let text = view.lines().join("\n");
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
        return;
    }

    let header_rows = kind.map_or(0, PanelKind::header_rows);
    let width = usize::from(inner.width);
    let origin = view.origin();
    let cursor = view.cursor();

    let lines: Vec<Line> = view
        .lines()
        .iter()
        .enumerate()
        .skip(origin.y)
        .take(usize::from(inner.height))
        .map(|(index, text)| {
            let visible: String = text.chars().skip(origin.x).collect();
            let style = if focused && view.highlight && index - origin.y == cursor.y {
                Styles::selected()
            } else if index < header_rows {
                Styles::header()
            } else {
                Style::default()
            };
            // 高亮整行
            let padding = width.saturating_sub(visible.width());
            Line::styled(format!("{visible}{}", " ".repeat(padding)), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 导航栏：面板名高亮，按键提示弱化
fn render_navigate(frame: &mut Frame, view: &View, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = view.lines().first().map_or_else(Line::default, |text| {
        match text.split_once(": ") {
            Some((name, hints)) => Line::from(vec![
                Span::styled(format!(" {name} "), Styles::hint_key()),
                Span::styled(hints.to_string(), Styles::hint_desc()),
            ]),
            None => Line::from(text.clone()),
        }
    });
    frame.render_widget(Paragraph::new(line), inner);
}
