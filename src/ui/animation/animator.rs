//! Animator driving the demo image
//!
//! The animator owns one driver per driver class. Compositing (native)
//! animations and layout animations cannot share a driver, so switching
//! between the two classes tears the driver down and builds a fresh one.
//! Within one class the driver is kept and simply retargeted.
//!
//! Two trigger modes exist:
//! - **Manual**: `animate_in` runs a timed pass from the start value to the
//!   end value and `tick` reports its completion exactly once.
//! - **Driven**: the value follows an external progress through an
//!   [`Interpolation`]; nothing is timed and nothing completes.

use iced::animation::Animation;
use iced::time::{Duration, Instant};

use super::interpolation::{Interpolation, OutputValue};
use crate::features::{AnimationDescriptor, AnimationKind, DriverClass};

/// Notifications from the animator back to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorEvent {
    /// The pending animate-in pass reached its end value
    AnimateInComplete,
}

/// How the animator is triggered
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Timed animate-in on request
    Manual { animate_in: bool },
    /// Follows `progress` through `interpolation`
    Driven {
        interpolation: Interpolation,
        progress: f32,
    },
}

/// Full configuration for one render of the animator
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    pub kind: AnimationKind,
    pub start_value: f32,
    pub end_value: f32,
    pub trigger: Trigger,
    /// Identity of the driver this config needs ("native" / "non-native")
    pub key: &'static str,
}

impl AnimatorConfig {
    pub fn is_manual(&self) -> bool {
        matches!(self.trigger, Trigger::Manual { .. })
    }

    /// Output range of a driven config
    pub fn output_range(&self) -> Option<[OutputValue; 2]> {
        match &self.trigger {
            Trigger::Driven { interpolation, .. } => Some(interpolation.output_range),
            Trigger::Manual { .. } => None,
        }
    }
}

/// Driver bound to a single driver class
struct Driver {
    class: DriverClass,
    generation: u64,
    timeline: Animation<bool>,
    in_flight: bool,
}

impl Driver {
    fn new(class: DriverClass, generation: u64) -> Self {
        Self {
            class,
            generation,
            timeline: Animation::new(false),
            in_flight: false,
        }
    }
}

/// Animator for one descriptor at a time
pub struct Animator {
    descriptor: AnimationDescriptor,
    duration: Duration,
    driver: Driver,
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("kind", &self.descriptor.kind())
            .field("driver", &self.driver.class.remount_key())
            .field("generation", &self.driver.generation)
            .field("in_flight", &self.driver.in_flight)
            .finish()
    }
}

impl Animator {
    pub fn new(descriptor: AnimationDescriptor, duration: Duration) -> Self {
        Self {
            descriptor,
            duration,
            driver: Driver::new(descriptor.driver_class(), 0),
        }
    }

    #[cfg(test)]
    pub fn descriptor(&self) -> AnimationDescriptor {
        self.descriptor
    }

    #[cfg(test)]
    pub fn driver_class(&self) -> DriverClass {
        self.driver.class
    }

    /// Increments every time the driver is rebuilt
    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.driver.generation
    }

    /// Switch to a new descriptor, rebuilding the driver on class change
    pub fn reconfigure(&mut self, descriptor: AnimationDescriptor) {
        let class = descriptor.driver_class();
        if class != self.driver.class {
            let generation = self.driver.generation + 1;
            tracing::debug!(
                "Rebuilding animator driver: {} -> {} (generation {})",
                self.driver.class.remount_key(),
                class.remount_key(),
                generation
            );
            self.driver = Driver::new(class, generation);
        }
        self.descriptor = descriptor;
    }

    /// Start an animate-in pass from the start value, restarting any pass
    /// already in flight
    pub fn animate_in(&mut self, now: Instant) {
        self.driver.timeline = Animation::new(false).duration(self.duration);
        self.driver.timeline.go_mut(true, now);
        self.driver.in_flight = true;
    }

    /// Drop any pass in flight and rest at the start value
    pub fn cancel(&mut self) {
        self.driver.timeline = Animation::new(false);
        self.driver.in_flight = false;
    }

    /// True until the pending pass has been reported complete by `tick`
    pub fn is_animating(&self) -> bool {
        self.driver.in_flight
    }

    /// Advance to `now`, reporting a finished animate-in pass once
    pub fn tick(&mut self, now: Instant) -> Option<AnimatorEvent> {
        if self.driver.in_flight && !self.driver.timeline.is_animating(now) {
            self.driver.in_flight = false;
            return Some(AnimatorEvent::AnimateInComplete);
        }
        None
    }

    /// Current animated value for the given trigger
    pub fn value(&self, trigger: &Trigger, now: Instant) -> f32 {
        match trigger {
            Trigger::Manual { .. } => self.driver.timeline.interpolate(
                self.descriptor.start_value(),
                self.descriptor.end_value(),
                now,
            ),
            Trigger::Driven {
                interpolation,
                progress,
            } => interpolation.apply(*progress).as_f32(),
        }
    }
}
