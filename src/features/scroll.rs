//! Scroll event sampling
//!
//! The selection list reports its offset on every scroll event. The offset is
//! only consumed on the Event tab, so the Static tab samples it so rarely that
//! it is effectively ignored.
//!
//! On the Event tab a sample dropped inside the interval is kept as pending
//! and flushed on the next frame, so the last offset of a scroll gesture is
//! never lost.

use iced::time::{Duration, Instant};

use crate::features::settings::ScrollSettings;
use crate::features::Tab;

/// Admits scroll samples at most once per interval
#[derive(Debug, Clone)]
pub struct ScrollSampler {
    interval: Duration,
    last_sample: Option<Instant>,
    /// Keep the latest dropped sample for `flush`
    trailing: bool,
    pending: Option<f32>,
}

impl ScrollSampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_sample: None,
            trailing: false,
            pending: None,
        }
    }

    /// Hold on to the latest dropped sample until the next flush
    pub fn with_trailing(mut self) -> Self {
        self.trailing = true;
        self
    }

    /// Sampler for the given tab using the configured throttles
    pub fn for_tab(tab: Tab, settings: &ScrollSettings) -> Self {
        match tab {
            Tab::Event => {
                Self::new(Duration::from_millis(settings.event_throttle_ms)).with_trailing()
            }
            Tab::Static => Self::new(Duration::from_millis(settings.static_throttle_ms)),
        }
    }

    #[cfg(test)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// A dropped sample is waiting for `flush`
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offer a sample taken at `now`. Returns the value to apply, if any.
    pub fn offer(&mut self, value: f32, now: Instant) -> Option<f32> {
        if self.admit(now) {
            self.pending = None;
            return Some(value);
        }

        if self.trailing {
            self.pending = Some(value);
        }
        None
    }

    /// Release the pending sample, if any
    pub fn flush(&mut self, now: Instant) -> Option<f32> {
        let value = self.pending.take()?;
        self.last_sample = Some(now);
        Some(value)
    }

    fn admit(&mut self, now: Instant) -> bool {
        let due = match self.last_sample {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };

        if due {
            self.last_sample = Some(now);
        }
        due
    }
}
