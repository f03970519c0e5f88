// App state and main event loop.
// Owns the feed screen, the event channel, and keyboard/mouse paging.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

use crate::cache::KeyValueStore;
use crate::config::Config;
use crate::error::Result;
use crate::event::AppEvent;
use crate::images::ImageFetcher;
use crate::picsum::PicsumClient;
use crate::screen::FeedScreen;
use crate::state::FeedLoader;
use crate::ui;

/// Input poll interval; also the spinner frame period.
const TICK: Duration = Duration::from_millis(100);

/// User intent decoded from a key or mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Char(' ') | KeyCode::Down | KeyCode::PageDown => {
                Some(Action::NextPage)
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastPage),
            _ => None,
        }
    }

    pub fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextPage),
            MouseEventKind::ScrollUp => Some(Action::PrevPage),
            _ => None,
        }
    }
}

/// Main application state.
pub struct App {
    pub screen: FeedScreen,
    /// Animation tick for spinners.
    pub tick: usize,
    /// Whether the app should exit.
    pub should_quit: bool,
    fetcher: ImageFetcher,
    events: UnboundedReceiver<AppEvent>,
}

impl App {
    /// Build the app and mount the feed screen. Must run inside a tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let client = PicsumClient::new(config.endpoint.as_str())?;
        let store = KeyValueStore::new(config.store_dir());
        info!(
            endpoint = %config.endpoint,
            store = %store.dir().display(),
            images = %config.image_source,
            "starting feed"
        );

        let (tx, events) = mpsc::unbounded_channel();
        let loader = FeedLoader::new(
            client.clone(),
            store,
            config.cache_key.as_str(),
            config.limit,
        );
        let fetcher = ImageFetcher::new(client, config.image_source, tx.clone());

        Ok(Self {
            screen: FeedScreen::mount(loader, tx),
            tick: 0,
            should_quit: false,
            fetcher,
            events,
        })
    }

    /// Main event loop. Unmounts the screen on exit.
    pub fn run(mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.drain_events();
            self.screen.request_images(&self.fetcher);
            terminal.draw(|frame| ui::draw(frame, &self.screen, self.tick))?;
            self.handle_input()?;
            self.tick = self.tick.wrapping_add(1);
        }

        self.screen.unmount();
        Ok(())
    }

    /// Apply everything background tasks have sent since the last frame.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.screen.handle(event);
        }
    }

    /// Handle keyboard and mouse events.
    fn handle_input(&mut self) -> io::Result<()> {
        if !event::poll(TICK)? {
            return Ok(());
        }
        let action = match event::read()? {
            Event::Key(key) => Action::from_key(key),
            Event::Mouse(mouse) => Action::from_mouse(mouse),
            _ => None,
        };
        if let Some(action) = action {
            self.apply(action);
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        let feed = &mut self.screen.feed;
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => feed.next_page(),
            Action::PrevPage => feed.prev_page(),
            Action::FirstPage => feed.first_page(),
            Action::LastPage => feed.last_page(),
        }
    }
}
