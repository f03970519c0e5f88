// UI module for rendering the TUI.
// Lays out the full-screen feed and a one-line status bar.

mod feed;
mod photo;

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::screen::FeedScreen;
use crate::state::Origin;

pub use feed::{AVATAR, IMAGE_ERROR_TEXT, spinner_frame};
pub use photo::{PhotoWidget, cover_sample};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, screen: &FeedScreen, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Feed
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    feed::render_feed(frame, screen, tick, chunks[0]);
    draw_status_bar(frame, screen, chunks[1]);
}

/// Draw the status bar with keybinding hints, page position and list origin.
fn draw_status_bar(frame: &mut Frame, screen: &FeedScreen, area: Rect) {
    let mut spans = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Page", Style::default().fg(Color::DarkGray)),
        Span::raw("  g/G "),
        Span::styled("Ends", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    let feed = &screen.feed;
    if feed.page_count() > 0 {
        spans.push(Span::styled(
            format!("  {}/{}", feed.page() + 1, feed.page_count()),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(origin) = &feed.origin {
        spans.push(Span::styled(
            format!("  {}", origin_label(origin)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Short description of where the list came from.
pub fn origin_label(origin: &Origin) -> String {
    match origin {
        Origin::Network => "fresh".to_string(),
        Origin::Cache {
            cached_at: Some(at),
        } => format!("cached {}", format_relative_time(at)),
        Origin::Cache { cached_at: None } => "cached".to_string(),
    }
}

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}
