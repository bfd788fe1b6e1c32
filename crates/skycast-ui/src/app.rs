//! Dashboard state.
//!
//! One `App` instance, owned by the main loop; every mutation happens
//! on that thread. Async fetch results arrive over a channel and are
//! applied here as whole-object swaps.

use skycast_weather::{CurrentConditions, DailyForecast, WeatherData};

pub struct App {
    /// Latest successful acquisition; replaced wholesale, never merged
    /// field-by-field. A failed fetch leaves it untouched.
    pub current: Option<CurrentConditions>,
    pub forecast: Vec<DailyForecast>,
    /// Single-slot notification. A new message replaces whatever is
    /// showing; dismissing clears it.
    pub notification: Option<String>,
    /// Search box contents.
    pub input: String,
    pub loading: bool,
    pub should_quit: bool,
    issued_seq: u64,
    applied_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            current: None,
            forecast: Vec::new(),
            notification: None,
            input: String::new(),
            loading: false,
            should_quit: false,
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    /// Sequence number for the next fetch. Later-issued requests
    /// supersede earlier ones regardless of completion order, which
    /// settles the startup race between the default-coordinate fetch
    /// and the geolocation fetch.
    pub fn next_seq(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Install a completed acquisition, unless a later-issued request
    /// already landed.
    pub fn apply_weather(&mut self, seq: u64, data: WeatherData) {
        if seq < self.applied_seq {
            tracing::debug!(seq, applied = self.applied_seq, "superseded fetch result dropped");
            return;
        }
        self.applied_seq = seq;
        self.current = Some(data.current);
        self.forecast = data.daily;
        self.loading = false;
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.loading = false;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Drain the search box for submission.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Primary condition category of the current snapshot, if any.
    pub fn current_category(&self) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(|c| c.conditions.first())
            .map(|c| c.main.as_str())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
