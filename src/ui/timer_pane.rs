use crate::app::AppState;
use crate::domain::{progress_track, CountdownTimer, TimeField, TimerState, UiMode};
use crate::ui::styles::{
    active_style, border_style, default_style, done_style, field_focus_style, focus_border_style,
    hint_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the action hint offers in each state
fn action_hint(timer: &CountdownTimer) -> &'static str {
    match timer.state() {
        TimerState::Idle => "[t] set  [s] start",
        TimerState::Active { .. } => "list locked until time is up",
        TimerState::Completed if timer.end_pending() => "time is up!",
        TimerState::Completed => "[r] refresh",
    }
}

/// Countdown fields as spans, highlighting the focused one
fn field_spans(timer: &CountdownTimer, focused: Option<TimeField>) -> Vec<Span<'static>> {
    let fields = timer.display_fields();
    let value_style = match timer.state() {
        TimerState::Active { .. } => active_style(),
        TimerState::Completed => done_style(),
        TimerState::Idle => default_style(),
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, field) in [TimeField::Hours, TimeField::Minutes, TimeField::Seconds]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw(" : "));
        }
        let style = if focused == Some(field) {
            field_focus_style()
        } else {
            value_style
        };
        spans.push(Span::styled(format!("{:>2}", fields.get(field)), style));
    }
    spans
}

/// Render the countdown pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, timer: &CountdownTimer, area: Rect) {
    let focused = match app.ui_mode {
        UiMode::EditingTimer(field) => Some(field),
        _ => None,
    };
    let state = timer.state();

    let mut first = field_spans(timer, focused);
    first.push(Span::raw("   "));
    first.push(Span::styled(action_hint(timer), hint_style()));

    // Borders and padding take four columns
    let track_width = area.width.saturating_sub(4) as usize;
    let progress = timer.progress();
    let lines = vec![
        Line::from(first),
        Line::raw(format!(" {}", progress_track(progress, track_width, app.config.use_emoji))),
        Line::styled(format!(" {:.0}%", progress * 100.0), hint_style()),
    ];

    let border = if focused.is_some() {
        focus_border_style()
    } else {
        border_style()
    };
    let title = format!(" Timer ({}) ", state.label());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_field_spans_show_remaining_while_active() {
        let mut timer = CountdownTimer::new(Duration::ZERO);
        timer.configure("0", "1", "0").unwrap();
        let now = Instant::now();
        timer.start(now).unwrap();
        timer.tick(now);

        let text: String = field_spans(&timer, None)
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(text, " 00 : 00 : 59");
    }

    #[test]
    fn test_action_hint_per_state() {
        let mut timer = CountdownTimer::new(Duration::from_secs(1));
        assert!(action_hint(&timer).contains("start"));

        timer.configure("0", "0", "1").unwrap();
        let now = Instant::now();
        timer.start(now).unwrap();
        timer.poll(now + Duration::from_secs(1));
        assert_eq!(action_hint(&timer), "time is up!");

        timer.poll(now + Duration::from_secs(3));
        assert!(action_hint(&timer).contains("refresh"));
    }
}
