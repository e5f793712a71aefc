//! Toast notifications stacked in the top-right corner.

use crate::notify::{Severity, ToastQueue};
use crate::theme::{Styles, Theme, UiConstants};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn severity_title(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Success => "✔",
        Severity::Destructive => "✘",
    }
}

/// Area of the `index`-th toast from the top, if it fits
pub fn toast_area(parent: Rect, index: u16) -> Option<Rect> {
    let width = UiConstants::TOAST_WIDTH.min(parent.width);
    let y = parent.y + 1 + index * UiConstants::TOAST_HEIGHT;
    if width == 0 || y + UiConstants::TOAST_HEIGHT > parent.y + parent.height {
        return None;
    }
    Some(Rect {
        x: parent.x + parent.width - width,
        y,
        width,
        height: UiConstants::TOAST_HEIGHT,
    })
}

/// Render visible toasts, newest on top
pub fn render_toasts(f: &mut Frame, parent: Rect, toasts: &ToastQueue) {
    for (index, toast) in toasts.iter().rev().enumerate() {
        let Ok(index) = u16::try_from(index) else {
            break;
        };
        let Some(area) = toast_area(parent, index) else {
            break;
        };
        let notice = &toast.notice;
        let color = Theme::severity_color(notice.severity);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} {} ", severity_title(notice.severity), notice.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Theme::severity_bg(notice.severity));

        let body = Paragraph::new(Line::from(Span::styled(
            notice.description.clone(),
            Styles::text(),
        )))
        .block(block)
        .wrap(Wrap { trim: true });

        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}
