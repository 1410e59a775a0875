//! Accrual Engine
//!
//! Keeps the two most recent proximity windows and, at every interval
//! boundary, grants friendship to characters present in both.
//!
//! A character only has to be sampled once in each window; it does not need
//! to stay in range for the whole interval.

use crate::config::FriendshipConfig;
use crate::error::{AccrualFailure, FriendshipError};
use crate::window::ProximityWindow;
use crate::world::{FriendshipStatus, RelationshipLedger};

/// A grant applied at an interval boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    /// Character name in host casing
    pub name: String,
    pub points_before: u32,
    pub points_after: u32,
    pub status: FriendshipStatus,
    pub datable: bool,
}

impl Grant {
    /// Points this grant added.
    pub fn gained(&self) -> u32 {
        self.points_after.saturating_sub(self.points_before)
    }
}

/// What one tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether this tick closed an interval
    pub boundary_reached: bool,
    /// Characters in this tick's sample
    pub sampled: usize,
    pub grants: Vec<Grant>,
    pub failures: Vec<FriendshipError>,
}

/// Two-window proximity history plus the interval countdown.
///
/// One instance lives for as long as the handler that owns it. Nothing here
/// is written to save data, so a reload restarts the countdown.
#[derive(Debug, Clone)]
pub struct AccrualEngine {
    config: FriendshipConfig,
    counter: u32,
    previous: ProximityWindow,
    current: ProximityWindow,
}

impl AccrualEngine {
    pub fn new(config: FriendshipConfig) -> Self {
        Self {
            counter: config.interval_length,
            config,
            previous: ProximityWindow::new(),
            current: ProximityWindow::new(),
        }
    }

    pub fn config(&self) -> &FriendshipConfig {
        &self.config
    }

    /// Ticks left before the next boundary.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn previous(&self) -> &ProximityWindow {
        &self.previous
    }

    pub fn current(&self) -> &ProximityWindow {
        &self.current
    }

    /// Swaps in new settings. A changed interval length restarts the countdown.
    pub fn set_config(&mut self, config: FriendshipConfig) {
        if config.interval_length != self.config.interval_length {
            self.counter = config.interval_length;
        }
        self.config = config;
    }

    /// Runs one tick with this tick's sample.
    pub fn on_tick<L>(&mut self, sample: &ProximityWindow, ledger: &mut L) -> TickOutcome
    where
        L: RelationshipLedger + ?Sized,
    {
        let mut outcome = TickOutcome {
            sampled: sample.len(),
            ..TickOutcome::default()
        };

        self.counter = self.counter.saturating_sub(1);
        self.current.merge(sample);

        if self.counter > 0 {
            return outcome;
        }

        outcome.boundary_reached = true;
        for name in ledger.relationship_names() {
            let Some(datable) = self.current.datable(&name) else {
                continue;
            };
            if !self.previous.contains(&name) {
                continue;
            }

            match self.grant(&name, datable, ledger) {
                Ok(Some(grant)) => outcome.grants.push(grant),
                Ok(None) => {}
                Err(reason) => {
                    let error = FriendshipError::PerCharacterAccrual { name, reason };
                    tracing::error!("{}", error);
                    outcome.failures.push(error);
                }
            }
        }

        tracing::debug!(
            "Interval closed: {} nearby now, {} before, {} grants",
            self.current.len(),
            self.previous.len(),
            outcome.grants.len()
        );

        self.counter = self.config.interval_length;
        self.previous = std::mem::take(&mut self.current);

        outcome
    }

    fn grant<L>(
        &self,
        name: &str,
        datable: bool,
        ledger: &mut L,
    ) -> Result<Option<Grant>, AccrualFailure>
    where
        L: RelationshipLedger + ?Sized,
    {
        let record = ledger
            .relationship(name)
            .ok_or(AccrualFailure::MissingRecord)?;
        if !record.below_cap(datable) {
            return Ok(None);
        }

        let points_after = ledger
            .add_points(name, self.config.points_per_interval)
            .map_err(AccrualFailure::UpdateRejected)?;

        Ok(Some(Grant {
            name: name.to_string(),
            points_before: record.points,
            points_after,
            status: record.status,
            datable,
        }))
    }
}
