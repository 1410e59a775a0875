//! Day Loop
//!
//! Drives the world through whole in-game days, raising the same lifecycle
//! events a real game would: a day start each morning, a location change on
//! every warp, and a time event every ten minutes until 2:00 am.

use bevy_ecs::prelude::*;
use std::collections::BTreeMap;

use friendship_core::{
    ErrorKind, GrantLog, ModConfig, PassiveFriendship, RelationshipRecord, TilePosition,
};
use friendship_events::{GameTime, HostEvent};

use crate::components::{GameClock, Relationships};
use crate::host::EcsHost;
use crate::scenario::Scenario;
use crate::setup::{move_player, spawn_scenario, wake_player, SpawnSummary};
use crate::systems::build_schedule;

/// Totals gathered over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub days: u32,
    pub ticks: u64,
    pub boundaries: u64,
    pub grants: u64,
    pub failures: BTreeMap<ErrorKind, u64>,
    pub final_points: BTreeMap<String, RelationshipRecord>,
}

pub struct Simulation {
    scenario: Scenario,
    world: World,
    schedule: Schedule,
    friendship: PassiveFriendship,
    grant_log: GrantLog,
    spawned: SpawnSummary,
    days_run: u32,
}

impl Simulation {
    pub fn new(scenario: Scenario, settings: ModConfig, grant_log: GrantLog) -> Self {
        let (world, spawned) = spawn_scenario(&scenario);
        Self {
            scenario,
            world,
            schedule: build_schedule(),
            friendship: PassiveFriendship::new(settings),
            grant_log,
            spawned,
            days_run: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn friendship(&self) -> &PassiveFriendship {
        &self.friendship
    }

    pub fn spawned(&self) -> &SpawnSummary {
        &self.spawned
    }

    pub fn points(&self, name: &str) -> Option<u32> {
        self.world
            .resource::<Relationships>()
            .get(name)
            .map(|record| record.points)
    }

    /// Runs `days` whole days and returns the totals.
    pub fn run(&mut self, days: u32) -> RunSummary {
        let mut summary = RunSummary::default();
        for _ in 0..days {
            self.run_day(&mut summary);
        }
        if let Err(e) = self.grant_log.flush() {
            tracing::warn!("Failed to flush grant log: {}", e);
        }

        summary.final_points = self
            .world
            .resource::<Relationships>()
            .iter()
            .map(|(name, record)| (name.clone(), *record))
            .collect();
        summary
    }

    fn run_day(&mut self, summary: &mut RunSummary) {
        if self.days_run > 0 {
            self.world.resource_mut::<GameClock>().date.advance_day();
        }
        self.days_run += 1;
        summary.days += 1;

        let date = {
            let mut clock = self.world.resource_mut::<GameClock>();
            clock.time = GameTime::day_start();
            clock.date
        };
        wake_player(&mut self.world, &self.scenario.player);
        self.dispatch(&HostEvent::day_started(date));

        let warps: Vec<_> = self
            .scenario
            .warps_by_time()
            .into_iter()
            .map(|warp| {
                (
                    warp.time,
                    warp.location.clone(),
                    TilePosition::new(warp.x, warp.y),
                )
            })
            .collect();
        let mut pending = warps.into_iter().peekable();

        let mut time = GameTime::day_start();
        while let Some(next) = time.next() {
            time = next;
            self.world.resource_mut::<GameClock>().time = time;
            self.schedule.run(&mut self.world);

            while let Some((_, location, position)) = pending.next_if(|warp| warp.0 <= time) {
                move_player(&mut self.world, &location, position);
                tracing::debug!("Player warped to {} at {}", location, time);
                self.dispatch(&HostEvent::location_changed(location));
            }

            let Some(outcome) = self.dispatch(&HostEvent::time_advanced(time)) else {
                continue;
            };
            summary.ticks += 1;
            if outcome.boundary_reached {
                summary.boundaries += 1;
            }
            summary.grants += outcome.grants.len() as u64;
            for failure in &outcome.failures {
                *summary.failures.entry(failure.kind()).or_insert(0) += 1;
            }
            if let Err(e) = self.grant_log.log_grants(date, time, &outcome.grants) {
                tracing::warn!("Failed to write grant log: {}", e);
            }
        }

        self.apply_setting_changes(self.days_run);
    }

    fn dispatch(&mut self, event: &HostEvent) -> Option<friendship_core::TickOutcome> {
        let mut host = EcsHost::new(&mut self.world);
        self.friendship.handle(event, &mut host)
    }

    /// Edits made in the settings menu during `day`; they apply next morning.
    fn apply_setting_changes(&mut self, day: u32) {
        let changes: Vec<_> = self
            .scenario
            .setting_changes
            .iter()
            .filter(|change| change.day == day)
            .collect();
        if changes.is_empty() {
            return;
        }

        let mut settings = self.friendship.settings().clone();
        for change in changes {
            if let Err(e) = settings.set(&change.key, change.value) {
                tracing::warn!("Ignoring setting change on day {}: {}", day, e);
            }
        }
        self.friendship.stage_settings(settings);
    }
}
