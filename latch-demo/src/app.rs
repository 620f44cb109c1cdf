//! Demo container: builds the widget sections, runs the event loop, and
//! provides the environment capabilities the widget treats as injected
//! (outside-click detection, wakeup-driven redraw).

use std::io;
use std::sync::{Arc, RwLock};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use latch::prelude::*;
use latch::wakeup;
use ratatui::layout::Position;
use thiserror::Error;

use crate::posts::{self, ResourceState};
use crate::terminal;

/// Top-level demo failure.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// One static widget section.
pub struct Section {
    pub heading: &'static str,
    pub select: Select,
}

pub struct App {
    /// Posts-backed section data; the widget is only built once this is
    /// `Ready`.
    pub posts: Arc<RwLock<ResourceState<Vec<SelectOption>>>>,
    /// The posts-backed select, mounted when the fetch completes.
    pub posts_select: Option<Select>,
    /// The statically-backed sections.
    pub sections: Vec<Section>,
    /// Index into [`selects`](Self::selects) of the focused widget.
    pub focus: usize,
    should_quit: bool,
}

impl App {
    fn new(wakeup: &WakeupSender) -> Self {
        let sections = build_sections();
        for section in &sections {
            section.select.mount(wakeup.clone());
        }
        Self {
            posts: Arc::new(RwLock::new(ResourceState::Loading)),
            posts_select: None,
            sections,
            focus: 0,
            should_quit: false,
        }
    }

    /// Kick off the post fetch; completion wakes the render loop.
    fn spawn_fetch(&self, wakeup: WakeupSender) {
        let posts = Arc::clone(&self.posts);
        let url = std::env::var("LATCH_POSTS_URL")
            .unwrap_or_else(|_| posts::DEFAULT_POSTS_URL.to_string());

        tokio::spawn(async move {
            let state = match posts::fetch_posts(&url).await {
                Ok(records) => {
                    log::info!("fetched {} posts from {url}", records.len());
                    ResourceState::Ready(posts::posts_to_options(&records))
                }
                Err(e) => {
                    log::error!("post fetch failed: {e}");
                    ResourceState::Error(e.to_string())
                }
            };
            if let Ok(mut guard) = posts.write() {
                *guard = state;
            }
            wakeup.send();
        });
    }

    /// Build and mount the posts-backed select once its data is ready.
    fn ensure_posts_select(&mut self, wakeup: &WakeupSender) {
        if self.posts_select.is_some() {
            return;
        }
        let options = match self.posts.read() {
            Ok(guard) => match &*guard {
                ResourceState::Ready(options) => options.clone(),
                _ => return,
            },
            Err(_) => return,
        };

        match Select::new(options, member_config(Variant::Plain).sorting(Sorting::Asc)) {
            Ok(select) => {
                select.mount(wakeup.clone());
                self.posts_select = Some(select);
            }
            Err(e) => {
                log::error!("posts select rejected: {e}");
                if let Ok(mut guard) = self.posts.write() {
                    *guard = ResourceState::Error(e.to_string());
                }
            }
        }
    }

    /// All live widgets in draw order. Handles are cheap clones.
    pub fn selects(&self) -> Vec<Select> {
        self.posts_select
            .iter()
            .cloned()
            .chain(self.sections.iter().map(|section| section.select.clone()))
            .collect()
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // The focused widget gets first refusal; unclaimed keys
                // fall through to the global bindings.
                let selects = self.selects();
                if let Some(select) = selects.get(self.focus)
                    && select.handle_key(&key).is_handled()
                {
                    return;
                }

                match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.should_quit = true;
                    }
                    KeyCode::Tab => {
                        if !selects.is_empty() {
                            self.focus = (self.focus + 1) % selects.len();
                        }
                    }
                    KeyCode::BackTab => {
                        if !selects.is_empty() {
                            self.focus = (self.focus + selects.len() - 1) % selects.len();
                        }
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Route a pointer press: the hit widget gets the click, every other
    /// widget gets the outside-click close. This is the click-outside
    /// convention the widget depends on.
    fn handle_click(&mut self, x: u16, y: u16) {
        let point = Position { x, y };
        let selects = self.selects();
        let mut hit = None;

        for (index, select) in selects.iter().enumerate() {
            if let Some(rect) = select.trigger_rect()
                && rect.contains(point)
            {
                hit = Some(index);
                self.focus = index;
                // The indicator occupies the rightmost trigger column.
                if x + 1 == rect.right() {
                    select.click_indicator();
                } else {
                    select.click_trigger();
                }
                break;
            }
            if select.is_open()
                && let Some(rect) = select.overlay_rect()
                && rect.contains(point)
            {
                hit = Some(index);
                self.focus = index;
                select.click_row((y - rect.y) as usize);
                break;
            }
        }

        for (index, select) in selects.iter().enumerate() {
            if hit != Some(index) {
                select.click_outside();
            }
        }
    }
}

/// Run the demo until the user quits.
pub async fn run() -> Result<(), DemoError> {
    let mut session = terminal::enter()?;
    let (wakeup_tx, mut wakeup_rx) = wakeup::channel();

    let mut app = App::new(&wakeup_tx);
    app.spawn_fetch(wakeup_tx.clone());

    let mut events = EventStream::new();
    loop {
        app.ensure_posts_select(&wakeup_tx);
        session.terminal.draw(|frame| crate::ui::draw(frame, &app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(e)) => log::error!("event stream error: {e}"),
                None => break,
            },
            Some(()) = wakeup_rx.recv() => {
                // Collapse bursts into a single redraw.
                wakeup_rx.drain();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// The shared configuration every section uses, minus its variant.
fn member_config(variant: Variant) -> SelectConfig {
    SelectConfig::new()
        .variant(variant)
        .width(32)
        .placeholder("Select team member")
        .title("Team Member")
        .hint("This is a hint text to help user.")
}

/// The static option list the non-API sections share.
fn team_members() -> Vec<SelectOption> {
    let member = |value: &str, label: &str, meta: &str, active: bool| {
        SelectOption::new(value, label)
            .with_meta(meta)
            .active(active)
            .with_icon("✦")
            .with_image("◍")
    };
    vec![
        member("phoenix", "Phoenix Baker", "@phoenix", true),
        member("olivia", "Olivia Rhye", "@olivia", false),
        member("lana", "Lana Steiner", "@lana", true),
        member("demi", "Demi Wilkinson", "@demi", false),
        member("candice", "Candice Wu", "@candice", true),
        member("natali", "Natali Craig", "@natali", false),
        member("drew", "Drew Cano", "@drew", true),
        member("selim", "Selim Günaydın", "@selim", true),
    ]
}

fn build_sections() -> Vec<Section> {
    let section = |heading: &'static str, config: SelectConfig| {
        let select = Select::new(team_members(), config)
            .expect("static team member options are unique")
            .on_change(log_selection);
        Section { heading, select }
    };

    vec![
        section(
            "Default",
            member_config(Variant::Plain).sorting(Sorting::Asc),
        ),
        section("Icon View", member_config(Variant::Icon)),
        section("Image View", member_config(Variant::Image)),
        section("Active View", member_config(Variant::Active)),
        section("Search View", member_config(Variant::Search)),
        section(
            "Multi Search View",
            member_config(Variant::MultiSearch).view_field(ViewField::Label),
        ),
    ]
}

/// Selection callback: the demo just records what the widget reported.
fn log_selection(change: &SelectionChange) {
    match change {
        SelectionChange::Single(option) => log::info!("selected {}", option.value),
        SelectionChange::Multi(options) => {
            let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
            log::info!("selection now [{}]", values.join(", "));
        }
    }
}
