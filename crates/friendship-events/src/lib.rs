//! Shared event and clock types for the passive friendship engine.
//!
//! This crate contains pure data structures with no engine logic.
//! It is a dependency for all other crates in the workspace.

pub mod clock;
pub mod event;

pub use clock::{
    ClockError, GameDate, GameTime, Season, DAYS_PER_SEASON, DAY_END, DAY_START,
    MINUTES_PER_TICK, TICKS_PER_DAY,
};

pub use event::{FriendshipStatus, GrantRecord, HostEvent};
