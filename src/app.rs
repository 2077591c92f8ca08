//! Application state and core logic for chroma-tui.
//!
//! This module contains the `App` struct, the palette controller. It holds
//! the seed/mode/count the user asked for, the last scheme the color service
//! returned, and transient feedback (loading flag, copy confirmation). Fetches
//! run as tokio tasks that report back through an mpsc channel; every state
//! change happens on the thread that owns the `App`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::{random_seed, ApiError, SchemeSource};
use crate::clipboard::ClipboardSink;
use crate::export::export_css;
use crate::input::Action;
use crate::models::{InputMode, SchemeMode, SchemeResult, SeedColor};

/// How long a swatch shows its "copied" check mark
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// `#` plus six digits
pub const MAX_SEED_INPUT: usize = 7;

/// Starting seed, mode and count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteDefaults {
    pub seed: SeedColor,
    pub mode: SchemeMode,
    pub count: u32,
}

impl Default for PaletteDefaults {
    fn default() -> Self {
        Self {
            seed: SeedColor::default(),
            mode: SchemeMode::default(),
            count: 5,
        }
    }
}

/// Results delivered back to the event loop
#[derive(Debug)]
pub enum AppEvent {
    SchemeLoaded {
        generation: u64,
        result: Result<SchemeResult, ApiError>,
    },
}

/// One-line feedback shown under the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

/// Application state
pub struct App {
    pub seed_color: SeedColor,
    pub mode: SchemeMode,
    pub count: u32,
    pub current_scheme: Option<SchemeResult>,
    pub is_loading: bool,
    pub copied_index: Option<usize>,
    copied_until: Option<Instant>,
    // Seed editing
    pub input_mode: InputMode,
    pub seed_input: String,
    // Palette navigation
    pub selected_index: usize,
    pub status: Option<StatusLine>,
    // Animation state
    pub animation_tick: u64,
    pub should_quit: bool,
    source: Arc<dyn SchemeSource>,
    clipboard: Box<dyn ClipboardSink>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    // Id of the most recent generate request; older results are dropped
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    activated: bool,
}

impl App {
    pub fn new(
        defaults: PaletteDefaults,
        source: Arc<dyn SchemeSource>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            seed_input: defaults.seed.to_string(),
            seed_color: defaults.seed,
            mode: defaults.mode,
            count: defaults.count,
            current_scheme: None,
            is_loading: false,
            copied_index: None,
            copied_until: None,
            input_mode: InputMode::Normal,
            selected_index: 0,
            status: None,
            animation_tick: 0,
            should_quit: false,
            source,
            clipboard,
            events_tx,
            events_rx,
            generation: 0,
            in_flight: None,
            activated: false,
        }
    }

    /// First activation fetches one scheme with the defaults; later calls do nothing
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.generate();
    }

    /// Generate from the current seed
    pub fn generate(&mut self) {
        let seed = self.seed_color.clone();
        self.generate_with(seed);
    }

    /// Start a fetch for `seed`, cancelling any fetch still in flight.
    /// Must be called from within a tokio runtime.
    pub fn generate_with(&mut self, seed: SeedColor) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.generation += 1;
        self.is_loading = true;

        let generation = self.generation;
        let mode = self.mode;
        let count = self.count;
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        debug!(generation, seed = %seed, %mode, count, "generating scheme");

        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_scheme(&seed, mode, count).await;
            // Receiver lives as long as the App; a send error means it is gone
            let _ = tx.send(AppEvent::SchemeLoaded { generation, result });
        }));
    }

    /// Pick a random seed and generate from it
    pub fn randomize(&mut self) {
        let seed = random_seed();
        info!(seed = %seed, "randomized seed color");
        self.seed_color = seed.clone();
        self.seed_input = seed.to_string();
        self.generate_with(seed);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SchemeLoaded { generation, result } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "discarding stale scheme result");
                    return;
                }
                self.in_flight = None;
                self.is_loading = false;

                match result {
                    Ok(scheme) => {
                        info!(
                            mode = %scheme.mode,
                            seed = %scheme.seed.hex.value,
                            colors = scheme.colors.len(),
                            "scheme loaded"
                        );
                        self.selected_index = self
                            .selected_index
                            .min(scheme.colors.len().saturating_sub(1));
                        self.current_scheme = Some(scheme);
                        if matches!(self.status, Some(StatusLine::Error(_))) {
                            self.status = None;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, kind = ?err.kind(), "failed to fetch color scheme");
                        self.status = Some(StatusLine::Error(format!("Could not load scheme: {err}")));
                    }
                }
            }
        }
    }

    /// Apply every event that has already arrived, without waiting
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next event
    #[allow(dead_code)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Copy `text`, mark swatch `index` as copied and (re)start the clear deadline.
    /// Clipboard failures are reported but still show the mark.
    pub fn copy(&mut self, text: &str, index: usize, now: Instant) {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                info!(index, text, "copied color to clipboard");
                self.status = Some(StatusLine::Info(format!("Copied {text}")));
            }
            Err(err) => {
                warn!(error = %err, "failed to copy to clipboard");
                self.status = Some(StatusLine::Error(format!("Failed to copy to clipboard: {err}")));
            }
        }
        self.copied_index = Some(index);
        self.copied_until = Some(now + COPY_FEEDBACK);
    }

    /// Copy the hex value of swatch `index`, if the palette has one there
    pub fn copy_swatch(&mut self, index: usize, now: Instant) {
        let Some(hex) = self
            .current_scheme
            .as_ref()
            .and_then(|scheme| scheme.color(index))
            .map(|color| color.hex.value.clone())
        else {
            return;
        };
        self.selected_index = index;
        self.copy(&hex, index, now);
    }

    /// Clear the copied mark once its deadline has passed
    pub fn expire_copied(&mut self, now: Instant) {
        if let Some(deadline) = self.copied_until {
            if now >= deadline {
                self.copied_index = None;
                self.copied_until = None;
            }
        }
    }

    /// Copy the whole palette as CSS custom properties
    pub fn export_palette(&mut self) {
        let Some(css) = self.current_scheme.as_ref().map(export_css) else {
            self.status = Some(StatusLine::Error("No palette to export yet".to_string()));
            return;
        };
        match self.clipboard.set_text(&css) {
            Ok(()) => {
                info!("exported palette as CSS");
                self.status = Some(StatusLine::Info("Palette copied as CSS variables".to_string()));
            }
            Err(err) => {
                warn!(error = %err, "failed to export palette");
                self.status = Some(StatusLine::Error(format!("Failed to copy to clipboard: {err}")));
            }
        }
    }

    fn swatch_count(&self) -> usize {
        self.current_scheme.as_ref().map_or(0, |s| s.colors.len())
    }

    pub fn select_next(&mut self) {
        let count = self.swatch_count();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.swatch_count();
        if count > 0 {
            self.selected_index = (self.selected_index + count - 1) % count;
        }
    }

    pub fn begin_seed_edit(&mut self) {
        self.input_mode = InputMode::EditingSeed;
        self.seed_input = self.seed_color.to_string();
    }

    pub fn push_seed_char(&mut self, c: char) {
        let accepted = c.is_ascii_hexdigit() || (c == '#' && self.seed_input.is_empty());
        if accepted && self.seed_input.chars().count() < MAX_SEED_INPUT {
            self.seed_input.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_seed_char(&mut self) {
        self.seed_input.pop();
    }

    /// Accept the typed seed and generate from it; invalid input stays in the editor
    pub fn commit_seed_edit(&mut self) {
        match SeedColor::parse(&self.seed_input) {
            Ok(seed) => {
                self.input_mode = InputMode::Normal;
                self.seed_input = seed.to_string();
                self.seed_color = seed.clone();
                self.status = None;
                self.generate_with(seed);
            }
            Err(err) => {
                self.status = Some(StatusLine::Error(format!("Invalid seed color: {err}")));
            }
        }
    }

    pub fn cancel_seed_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.seed_input = self.seed_color.to_string();
    }

    /// Advance animations and timers
    pub fn on_tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.expire_copied(now);
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Generate => self.generate(),
            Action::Randomize => self.randomize(),
            Action::NextMode => self.mode = self.mode.next(),
            Action::PreviousMode => self.mode = self.mode.previous(),
            Action::SelectNext => self.select_next(),
            Action::SelectPrevious => self.select_previous(),
            Action::CopySelected => self.copy_swatch(self.selected_index, now),
            Action::CopySwatch(index) => self.copy_swatch(index, now),
            Action::ExportPalette => self.export_palette(),
            Action::EditSeed => self.begin_seed_edit(),
            Action::SeedChar(c) => self.push_seed_char(c),
            Action::SeedBackspace => self.pop_seed_char(),
            Action::CommitSeed => self.commit_seed_edit(),
            Action::CancelSeed => self.cancel_seed_edit(),
        }
    }
}
