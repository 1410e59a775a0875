//! Host event handler.
//!
//! Maps host lifecycle events onto the sampler and the accrual engine. The
//! host dispatches events one at a time, so the handler is plain `&mut self`
//! state with no locking.

use friendship_events::{GameTime, HostEvent};

use crate::accrual::{AccrualEngine, TickOutcome};
use crate::config::{FriendshipConfig, ModConfig};
use crate::sampler::sample_world;
use crate::window::ProximityWindow;
use crate::world::{RelationshipLedger, WorldSnapshotProvider};

/// Everything the engine needs from the host, behind one bound.
pub trait Host: WorldSnapshotProvider + RelationshipLedger {}

impl<T: WorldSnapshotProvider + RelationshipLedger + ?Sized> Host for T {}

/// Passive friendship for one player.
#[derive(Debug, Clone)]
pub struct PassiveFriendship {
    settings: ModConfig,
    staged: Option<ModConfig>,
    engine: AccrualEngine,
    location: Option<String>,
}

impl PassiveFriendship {
    /// Validates `settings` and logs one diagnostic per clamped field.
    pub fn new(settings: ModConfig) -> Self {
        let config = apply_validation(&settings);
        Self {
            settings,
            staged: None,
            engine: AccrualEngine::new(config),
            location: None,
        }
    }

    /// Settings the engine is running with, as the player wrote them.
    pub fn settings(&self) -> &ModConfig {
        &self.settings
    }

    pub fn config(&self) -> &FriendshipConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &AccrualEngine {
        &self.engine
    }

    /// Location the next tick will sample.
    pub fn cached_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Stages edited settings; they take effect at the next day start.
    pub fn stage_settings(&mut self, settings: ModConfig) {
        self.staged = Some(settings);
    }

    pub fn has_staged_settings(&self) -> bool {
        self.staged.is_some()
    }

    /// Handles one host event. Returns the tick outcome for time events that ran a tick.
    pub fn handle<H>(&mut self, event: &HostEvent, host: &mut H) -> Option<TickOutcome>
    where
        H: Host + ?Sized,
    {
        match event {
            HostEvent::DayStarted { date } => {
                self.apply_staged();
                self.location = host.current_location();
                tracing::debug!(
                    "Day {} started in {}",
                    date,
                    self.location.as_deref().unwrap_or("<unknown>")
                );
                None
            }
            HostEvent::LocationChanged { location } => {
                self.location = Some(location.clone());
                None
            }
            HostEvent::TimeAdvanced { time } => self.on_time_advanced(*time, host),
        }
    }

    fn on_time_advanced<H>(&mut self, time: GameTime, host: &mut H) -> Option<TickOutcome>
    where
        H: Host + ?Sized,
    {
        if !host.is_world_ready() {
            return None;
        }

        let radius = self.engine.config().radius;
        let (sample, unavailable) = match sample_world(&*host, self.location.as_deref(), radius) {
            Ok(sample) => (sample, None),
            Err(e) => {
                tracing::error!("Skipping proximity sample at {}: {}", time, e);
                (ProximityWindow::new(), Some(e))
            }
        };

        let mut outcome = self.engine.on_tick(&sample, host);
        if let Some(e) = unavailable {
            outcome.failures.insert(0, e);
        }

        if self.engine.config().notify {
            for grant in &outcome.grants {
                tracing::info!(
                    "Gained {} friendship with {} at {}. Now at {} points.",
                    grant.gained(),
                    grant.name,
                    time,
                    grant.points_after
                );
            }
        }

        Some(outcome)
    }

    fn apply_staged(&mut self) {
        if let Some(settings) = self.staged.take() {
            let config = apply_validation(&settings);
            self.engine.set_config(config);
            self.settings = settings;
            tracing::info!("Applied updated friendship settings");
        }
    }
}

fn apply_validation(settings: &ModConfig) -> FriendshipConfig {
    let (config, issues) = settings.validate();
    for issue in &issues {
        tracing::error!("{}", issue);
    }
    config
}
