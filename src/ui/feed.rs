// Feed page rendering.
// One full-screen page per photo with image, load overlay, and author badge.

use ratatui::{prelude::*, widgets::*};

use crate::picsum::PhotoRecord;
use crate::screen::FeedScreen;
use crate::state::ImageLoadState;

use super::photo::PhotoWidget;

pub const LOADING_BG: Color = Color::Rgb(0xec, 0xf0, 0xf1);
pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const PAGE_BG: Color = Color::Rgb(0x12, 0x12, 0x12);
pub const OVERLAY_BG: Color = Color::Rgb(0x21, 0x21, 0x21);

/// Stand-in for the bundled person icon.
pub const AVATAR: &str = "👤";
pub const IMAGE_ERROR_TEXT: &str = "Image unavailable";

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation tick.
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER[tick % SPINNER.len()]
}

/// Render the feed: spinner while loading, otherwise the current page.
pub fn render_feed(frame: &mut Frame, screen: &FeedScreen, tick: usize, area: Rect) {
    if screen.feed.loading {
        render_loading(frame, area, tick);
        return;
    }

    match screen.feed.current() {
        Some(photo) => render_page(frame, screen, photo, tick, area),
        None => render_empty(frame, area),
    }
}

/// Centered list-level spinner.
fn render_loading(frame: &mut Frame, area: Rect, tick: usize) {
    frame.render_widget(Block::default().style(Style::default().bg(LOADING_BG)), area);
    let spinner = Paragraph::new(spinner_frame(tick))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(ACCENT)
                .bg(LOADING_BG)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(spinner, centered(area, 1, 1));
}

fn render_empty(frame: &mut Frame, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(LOADING_BG)), area);
    let text = Paragraph::new("No photos")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray).bg(LOADING_BG));
    frame.render_widget(text, centered(area, area.width, 1));
}

/// Draw one full-screen page.
fn render_page(
    frame: &mut Frame,
    screen: &FeedScreen,
    photo: &PhotoRecord,
    tick: usize,
    area: Rect,
) {
    frame.render_widget(Block::default().style(Style::default().bg(PAGE_BG)), area);

    let image_area = image_rect(area);
    if let Some(thumbnail) = screen.thumbnail(&photo.id) {
        frame.render_widget(PhotoWidget::new(thumbnail), image_area);
    }

    match screen.image_state(&photo.id) {
        ImageLoadState::Loading => {
            let spinner = Paragraph::new(spinner_frame(tick))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).bg(PAGE_BG));
            frame.render_widget(spinner, centered(image_area, 1, 1));
        }
        ImageLoadState::Error => {
            let width = IMAGE_ERROR_TEXT.len() as u16 + 4;
            let badge_area = centered(image_area, width, 3);
            frame.render_widget(Clear, badge_area);
            let badge = Paragraph::new(IMAGE_ERROR_TEXT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).bg(Color::Red))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
            frame.render_widget(badge, badge_area);
        }
        ImageLoadState::Loaded => {}
    }

    render_author(frame, photo, overlay_rect(area));
}

/// Rounded attribution box with the avatar glyph and author name.
fn render_author(frame: &mut Frame, photo: &PhotoRecord, area: Rect) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(OVERLAY_BG))
        .style(Style::default().bg(OVERLAY_BG));

    let line = Line::from(vec![
        Span::raw(format!("{} ", AVATAR)),
        Span::styled(photo.author.as_str(), Style::default().fg(Color::White)),
    ]);
    let text = Paragraph::new(line).block(block).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

/// Top 90% of a page, where the photo goes.
pub fn image_rect(page: Rect) -> Rect {
    let height = (u32::from(page.height) * 9 / 10) as u16;
    Rect { height, ..page }
}

/// Author overlay: 60% wide, 10% tall (at least 3 rows), inset 2% from the
/// left and 5% from the bottom.
pub fn overlay_rect(page: Rect) -> Rect {
    let percent = |value: u16, pct: u32| (u32::from(value) * pct / 100) as u16;

    let width = percent(page.width, 60).max(1);
    let height = percent(page.height, 10).max(3).min(page.height);
    let x = page.x + percent(page.width, 2);
    let bottom_gap = percent(page.height, 5);
    let y = page.bottom().saturating_sub(bottom_gap + height).max(page.y);
    Rect::new(x, y, width, height)
}

/// A `width`x`height` rect centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
