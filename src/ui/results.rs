//! Results screen: overall score gauge and the scrollable report body.

use crate::feedback::{FeedbackResult, FeedbackSection, MAX_SCORE, ScoreBand};
use crate::job::JobContext;
use crate::theme::{Colors, Styles, Theme};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const SECTION_BAR_WIDTH: usize = 20;

fn section_bar(score: u8) -> String {
    let filled = usize::from(score) * SECTION_BAR_WIDTH / usize::from(MAX_SCORE);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(SECTION_BAR_WIDTH - filled)
    )
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Styles::text_bold().add_modifier(Modifier::UNDERLINED),
    ))
}

fn section_lines(section: &FeedbackSection, out: &mut Vec<Line<'static>>) {
    let band = section.band();
    let style = Theme::band_style(band);
    out.push(Line::from(vec![
        Span::styled(format!("  {} ", band.symbol()), style),
        Span::styled(format!("{:<26}", section.title), Styles::text_bold()),
        Span::styled(format!("{:>3}/{} ", section.score, MAX_SCORE), style),
        Span::styled(section_bar(section.score), Style::default().fg(Theme::band_color(band))),
    ]));

    if !section.feedback.is_empty() {
        for line in &section.feedback {
            out.push(Line::from(vec![
                Span::styled("      • ", Styles::text_muted()),
                Span::styled(line.clone(), Styles::text_secondary()),
            ]));
        }
    }
    if !section.suggestions.is_empty() {
        out.push(Line::from(Span::styled("      Suggestions:", Styles::focused())));
        for line in &section.suggestions {
            out.push(Line::from(vec![
                Span::styled("      → ", Styles::focused()),
                Span::styled(line.clone(), Styles::text()),
            ]));
        }
    }
    out.push(Line::from(""));
}

/// Report body below the overall score. Empty blocks are omitted.
pub fn report_lines(feedback: &FeedbackResult) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    if !feedback.sections.is_empty() {
        out.push(heading("Section Scores"));
        out.push(Line::from(""));
        for section in &feedback.sections {
            section_lines(section, &mut out);
        }
    }

    if !feedback.strengths.is_empty() {
        out.push(heading("Strengths"));
        for item in &feedback.strengths {
            out.push(Line::from(vec![
                Span::styled(format!("  {} ", ScoreBand::Good.symbol()), Styles::success()),
                Span::styled(item.clone(), Styles::text()),
            ]));
        }
        out.push(Line::from(""));
    }

    if !feedback.improvements.is_empty() {
        out.push(heading("Areas for Improvement"));
        for item in &feedback.improvements {
            out.push(Line::from(vec![
                Span::styled(format!("  {} ", ScoreBand::Warning.symbol()), Styles::warning()),
                Span::styled(item.clone(), Styles::text()),
            ]));
        }
        out.push(Line::from(""));
    }

    if !feedback.missing_keywords.is_empty() {
        out.push(heading("Missing Keywords"));
        out.push(Line::from(Span::styled(
            "  Consider adding these keywords to improve ATS compatibility:",
            Styles::text_muted(),
        )));
        let mut chips = vec![Span::raw("  ")];
        for keyword in &feedback.missing_keywords {
            chips.push(Span::styled(format!("[{}]", keyword), Styles::tag()));
            chips.push(Span::raw(" "));
        }
        out.push(Line::from(chips));
        out.push(Line::from(""));
    }

    out.push(Line::from(Span::styled(
        "Press D to download this report, N to analyze another resume",
        Styles::text_muted(),
    )));
    out
}

/// Largest scroll offset that still shows part of the report body
pub fn max_scroll(feedback: &FeedbackResult) -> u16 {
    u16::try_from(report_lines(feedback).len().saturating_sub(1)).unwrap_or(u16::MAX)
}

/// Render the results screen
pub fn render_results_screen(
    f: &mut Frame,
    area: Rect,
    feedback: Option<&FeedbackResult>,
    job: &JobContext,
    scroll: u16,
) {
    let Some(feedback) = feedback else {
        f.render_widget(
            Paragraph::new("No report available.")
                .style(Styles::text_muted())
                .alignment(Alignment::Center),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + targeting
            Constraint::Length(5), // overall score
            Constraint::Min(3),    // report body
        ])
        .split(area);

    let mut title = vec![Line::from(Span::styled(
        WizardStep::Results.title(),
        Styles::title(),
    ))];
    if job.has_role() {
        title.push(Line::from(vec![
            Span::styled("Targeting: ", Styles::text_muted()),
            Span::styled(job.targeting_summary(), Styles::text_secondary()),
        ]));
    }
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    render_overall_score(f, chunks[1], feedback);

    let max_scroll = max_scroll(feedback);
    let body = Paragraph::new(report_lines(feedback))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Styles::border_inactive()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));
    f.render_widget(body, chunks[2]);
}

fn render_overall_score(f: &mut Frame, area: Rect, feedback: &FeedbackResult) {
    let band = feedback.band();
    let block = Block::default()
        .title(Span::styled(" Overall Score ", Styles::text_bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::band_color(band)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(Theme::band_color(band))
                .bg(Colors::BG_GAUGE),
        )
        .label(Span::styled(
            format!("{}/{}", feedback.overall_score, MAX_SCORE),
            Theme::band_style(band),
        ))
        .percent(u16::from(feedback.overall_score.min(MAX_SCORE)));
    f.render_widget(gauge, rows[0]);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", band.symbol()), Theme::band_style(band)),
            Span::styled(band.verdict(), Styles::text()),
        ]))
        .alignment(Alignment::Center),
        rows[1],
    );
}
