//! Shared fixtures for unit tests: service-shaped JSON, a scripted scheme
//! source and a recording clipboard.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::{ApiError, SchemeSource};
use crate::app::{App, PaletteDefaults};
use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::models::{ColorEntry, SchemeMode, SchemeResult, SeedColor};
use crate::utils::parse_hex_rgb;

/// One color object in the service's JSON shape; `hex` has no leading `#`
pub fn color_json(hex: &str, name: &str) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((0, 0, 0));
    let contrast = if u16::from(r) + u16::from(g) + u16::from(b) > 382 {
        "#000000"
    } else {
        "#FFFFFF"
    };
    format!(
        r##"{{"hex":{{"value":"#{hex}","clean":"{hex}"}},"rgb":{{"value":"rgb({r}, {g}, {b})","r":{r},"g":{g},"b":{b}}},"hsl":{{"value":"hsl(0, 0%, 50%)","h":0,"s":0,"l":50}},"name":{{"value":"{name}"}},"contrast":{{"value":"{contrast}"}}}}"##
    )
}

/// A full `/scheme` body; `count` is inserted verbatim so tests can send a
/// number or a quoted string
pub fn scheme_json(mode: &str, count: &str, colors: &[(&str, &str)]) -> String {
    let seed = colors.first().map(|(hex, _)| *hex).unwrap_or("000000");
    let colors: Vec<String> = colors
        .iter()
        .map(|(hex, name)| color_json(hex, name))
        .collect();
    format!(
        r#"{{"mode":"{mode}","count":{count},"colors":[{}],"seed":{}}}"#,
        colors.join(","),
        color_json(seed, "Seed")
    )
}

pub fn scheme(mode: SchemeMode, colors: &[(&str, &str)]) -> SchemeResult {
    let json = scheme_json(mode.as_str(), &colors.len().to_string(), colors);
    serde_json::from_str(&json).unwrap()
}

pub fn color_entry(hex: &str, name: &str) -> ColorEntry {
    serde_json::from_str(&color_json(hex, name)).unwrap()
}

/// Scheme whose seed and colors echo the requested seed, so tests can tell
/// which request produced it
pub fn echo_scheme(seed: &SeedColor, mode: SchemeMode, count: u32) -> SchemeResult {
    SchemeResult {
        mode,
        count,
        colors: (0..count)
            .map(|i| color_entry(seed.hex_digits(), &format!("Swatch {}", i + 1)))
            .collect(),
        seed: color_entry(seed.hex_digits(), "Seed"),
    }
}

/// Scripted `SchemeSource` that records every call
pub struct FakeSource {
    calls: Mutex<Vec<(SeedColor, SchemeMode, u32)>>,
    delays: Mutex<VecDeque<Duration>>,
    fail_with: Option<StatusCode>,
}

impl FakeSource {
    pub fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            delays: Mutex::new(VecDeque::new()),
            fail_with: None,
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::ok()
        }
    }

    /// Per-call delays, consumed in call order
    pub fn with_delays(self, delays: Vec<Duration>) -> Self {
        Self {
            delays: Mutex::new(delays.into()),
            ..self
        }
    }

    pub fn calls(&self) -> Vec<(SeedColor, SchemeMode, u32)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, seed: &SeedColor, mode: SchemeMode, count: u32) -> Option<Duration> {
        self.calls.lock().unwrap().push((seed.clone(), mode, count));
        self.delays.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl SchemeSource for FakeSource {
    async fn fetch_scheme(
        &self,
        seed: &SeedColor,
        mode: SchemeMode,
        count: u32,
    ) -> Result<SchemeResult, ApiError> {
        if let Some(delay) = self.record(seed, mode, count) {
            tokio::time::sleep(delay).await;
        }
        match self.fail_with {
            Some(status) => Err(ApiError::Status { status }),
            None => Ok(echo_scheme(seed, mode, count)),
        }
    }
}

/// Clipboard that keeps everything written to it
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub written: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable(arboard::Error::ClipboardNotSupported));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// App wired to the given source and a recording clipboard
pub fn test_app(source: Arc<FakeSource>) -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::default();
    let app = App::new(PaletteDefaults::default(), source, Box::new(clipboard.clone()));
    (app, clipboard)
}
