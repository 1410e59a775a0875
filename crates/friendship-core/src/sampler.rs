//! Proximity Sampler
//!
//! Finds the trackable characters standing inside the square detection
//! region around the player.

use crate::error::{FriendshipError, WorldUnavailable};
use crate::window::ProximityWindow;
use crate::world::{TilePosition, TrackedCharacter, WorldSnapshotProvider};

/// True when `npc` lies inside the square of half side `radius` centred on `player`.
pub fn in_range(player: TilePosition, npc: TilePosition, radius: u32) -> bool {
    player.chebyshev_distance(&npc) <= radius
}

/// Pure sampling over an explicit roster.
///
/// Characters rejected by `is_trackable` never enter the window.
pub fn sample<F>(
    player: TilePosition,
    roster: &[TrackedCharacter],
    radius: u32,
    is_trackable: F,
) -> ProximityWindow
where
    F: Fn(&str) -> bool,
{
    roster
        .iter()
        .filter(|character| is_trackable(&character.name))
        .filter(|character| in_range(player, character.position, radius))
        .map(|character| (character.key(), character.datable))
        .collect()
}

/// Samples the given location through the host.
///
/// Fails with [`FriendshipError::WorldStateUnavailable`] when the location is
/// unknown or the host cannot produce its roster; callers treat that as an
/// empty sample.
pub fn sample_world<W>(
    world: &W,
    location: Option<&str>,
    radius: u32,
) -> Result<ProximityWindow, FriendshipError>
where
    W: WorldSnapshotProvider + ?Sized,
{
    let location = location.ok_or(FriendshipError::WorldStateUnavailable(
        WorldUnavailable::NoCurrentLocation,
    ))?;
    let roster = world.roster(location).ok_or_else(|| {
        FriendshipError::WorldStateUnavailable(WorldUnavailable::RosterMissing(
            location.to_string(),
        ))
    })?;

    Ok(sample(world.player_position(), &roster, radius, |name| {
        world.is_trackable(name)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fixtures::FixtureWorld;
    use crate::world::FriendshipStatus;

    fn npc(name: &str, x: i32, y: i32) -> TrackedCharacter {
        TrackedCharacter::new(name, TilePosition::new(x, y), true)
    }

    #[test]
    fn test_in_range_is_square() {
        let player = TilePosition::new(10, 10);

        assert!(in_range(player, TilePosition::new(12, 12), 2));
        assert!(in_range(player, TilePosition::new(8, 12), 2));
        assert!(!in_range(player, TilePosition::new(13, 10), 2));
        assert!(!in_range(player, TilePosition::new(10, 7), 2));
    }

    #[test]
    fn test_in_range_matches_axis_definition() {
        let player = TilePosition::new(3, -4);
        for radius in 0..4u32 {
            for x in -4..10 {
                for y in -10..3 {
                    let expected = (x - player.x).unsigned_abs() <= radius
                        && (y - player.y).unsigned_abs() <= radius;
                    assert_eq!(
                        in_range(player, TilePosition::new(x, y), radius),
                        expected,
                        "radius {} at ({}, {})",
                        radius,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_radius_only_same_tile() {
        let player = TilePosition::new(5, 5);
        assert!(in_range(player, player, 0));
        assert!(!in_range(player, TilePosition::new(5, 6), 0));
    }

    #[test]
    fn test_sample_filters_untrackable_and_distant() {
        let roster = vec![
            npc("Abigail", 11, 11),
            npc("Junimo", 10, 10),
            npc("Sebastian", 13, 13),
        ];

        let window = sample(TilePosition::new(10, 10), &roster, 2, |name| {
            name != "Junimo"
        });

        assert_eq!(window.len(), 1);
        assert!(window.contains("abigail"));
        assert!(!window.contains("junimo"));
        assert!(!window.contains("sebastian"));
    }

    #[test]
    fn test_sample_keeps_datable_flag() {
        let roster = vec![TrackedCharacter::new("Lewis", TilePosition::new(0, 1), false)];
        let window = sample(TilePosition::new(0, 0), &roster, 1, |_| true);
        assert_eq!(window.datable("Lewis"), Some(false));
    }

    #[test]
    fn test_sample_world_reads_host() {
        let world = FixtureWorld::new("Town", TilePosition::new(10, 10))
            .with_character("Town", "Abigail", TilePosition::new(11, 11), true)
            .with_relationship("Abigail", 100, FriendshipStatus::Single);

        let window = sample_world(&world, Some("Town"), 2).unwrap();
        assert!(window.contains("abigail"));
    }

    #[test]
    fn test_sample_world_without_location() {
        let world = FixtureWorld::new("Town", TilePosition::new(0, 0));

        let err = sample_world(&world, None, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WorldStateUnavailable);
        assert_eq!(
            err,
            FriendshipError::WorldStateUnavailable(WorldUnavailable::NoCurrentLocation)
        );
    }

    #[test]
    fn test_sample_world_unknown_location() {
        let world = FixtureWorld::new("Town", TilePosition::new(0, 0));

        let err = sample_world(&world, Some("Mines"), 2).unwrap_err();
        assert_eq!(
            err,
            FriendshipError::WorldStateUnavailable(WorldUnavailable::RosterMissing(
                "Mines".to_string()
            ))
        );
    }
}
