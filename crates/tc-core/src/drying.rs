//! Drying-time countdowns for spherical objects.
//!
//! An object's drying time in seconds is its surface area, truncated. Each
//! tracked object counts down from the moment it was added; finished objects
//! are dropped on the next [`DryingTracker::prune`].

use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::timecode::TimeCode;

/// Default name prefix for tracked objects.
pub const DEFAULT_PREFIX: &str = "Object";

/// Errors from the drying tracker.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    /// Radius was zero, negative, or not a finite number.
    #[error("radius must be a positive number, got {radius}")]
    InvalidRadius { radius: f64 },
}

/// Surface area of a sphere: `4 * pi * r^2`.
pub fn sphere_surface_area(radius: f64) -> f64 {
    4.0 * PI * radius.powi(2)
}

/// Drying time for a surface area, one second per unit of area.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn drying_time(surface_area: f64) -> TimeCode {
    TimeCode::from_seconds(surface_area as u64)
}

/// One object being tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryingSnapshot {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub time_to_dry: TimeCode,
}

impl DryingSnapshot {
    pub const fn new(name: String, started_at: DateTime<Utc>, time_to_dry: TimeCode) -> Self {
        Self {
            name,
            started_at,
            time_to_dry,
        }
    }

    /// Time left as of `now`, never below zero.
    ///
    /// Elapsed time is counted in whole seconds. A `now` earlier than the
    /// start (clock moved backwards) counts as no time elapsed.
    pub fn time_remaining_at(&self, now: DateTime<Utc>) -> TimeCode {
        let elapsed = u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0);
        TimeCode::from_seconds(self.time_to_dry.total_seconds().saturating_sub(elapsed))
    }

    /// Time left right now.
    pub fn time_remaining(&self) -> TimeCode {
        self.time_remaining_at(Utc::now())
    }

    pub fn is_dry_at(&self, now: DateTime<Utc>) -> bool {
        self.time_remaining_at(now) == TimeCode::ZERO
    }

    /// `"<name> takes <H:M:S> to dry, <H:M:S> remaining"`.
    pub fn status_line_at(&self, now: DateTime<Utc>) -> String {
        format!(
            "{} takes {} to dry, {} remaining",
            self.name,
            self.time_to_dry,
            self.time_remaining_at(now)
        )
    }
}

/// Ordered collection of drying objects.
#[derive(Debug, Clone)]
pub struct DryingTracker {
    prefix: String,
    added: u32,
    items: Vec<DryingSnapshot>,
}

impl Default for DryingTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl DryingTracker {
    /// Creates an empty tracker naming objects `"<prefix> <n>"`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            added: 0,
            items: Vec::new(),
        }
    }

    /// Starts tracking a sphere of the given radius as of `now`.
    ///
    /// Numbering keeps counting across prunes, so names are never reused.
    pub fn add(
        &mut self,
        radius: f64,
        now: DateTime<Utc>,
    ) -> Result<&DryingSnapshot, TrackerError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TrackerError::InvalidRadius { radius });
        }

        self.added += 1;
        let name = format!("{} {}", self.prefix, self.added);
        let time_to_dry = drying_time(sphere_surface_area(radius));
        tracing::debug!(%name, radius, %time_to_dry, "tracking new object");

        self.items.push(DryingSnapshot::new(name, now, time_to_dry));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Drops every object that has finished drying. Returns how many were dropped.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_dry_at(now));
        let removed = before - self.items.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.items.len(), "pruned dry objects");
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &DryingSnapshot> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
