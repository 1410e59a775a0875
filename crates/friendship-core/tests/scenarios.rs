//! End-to-end scenarios driven through host events.
//!
//! Each test plays a short in-game day against an in-memory host and checks
//! the relationship totals the host ends up with.

use friendship_core::fixtures::FixtureWorld;
use friendship_core::{
    hearts, ErrorKind, FriendshipStatus, ModConfig, PassiveFriendship, TickOutcome, TilePosition,
};
use friendship_events::{GameDate, GameTime, HostEvent};

fn settings(radius: i64, interval: i64, grant: i64) -> ModConfig {
    ModConfig {
        friendship_radius: radius,
        notify_about_friendship_in_console: false,
        time_interval_length_in_ten_minute_increments: interval,
        amount_of_friendship_gained_per_time_interval: grant,
    }
}

/// Starts a day and runs `ticks` time events, returning every tick outcome.
fn play(
    handler: &mut PassiveFriendship,
    world: &mut FixtureWorld,
    ticks: usize,
) -> Vec<TickOutcome> {
    handler.handle(&HostEvent::day_started(GameDate::start()), world);

    let mut outcomes = Vec::new();
    let mut time = GameTime::day_start();
    for _ in 0..ticks {
        time = time.next().expect("scenario fits in one day");
        if let Some(outcome) = handler.handle(&HostEvent::time_advanced(time), world) {
            outcomes.push(outcome);
        }
    }
    outcomes
}

fn abigail_at(x: i32, y: i32, points: u32) -> FixtureWorld {
    FixtureWorld::new("Town", TilePosition::new(10, 10))
        .with_character("Town", "Abigail", TilePosition::new(x, y), true)
        .with_relationship("Abigail", points, FriendshipStatus::Single)
}

#[test]
fn test_nearby_character_gains_after_two_ticks() {
    let mut handler = PassiveFriendship::new(settings(2, 1, 1));
    let mut world = abigail_at(11, 11, 100);

    play(&mut handler, &mut world, 2);

    assert_eq!(world.points("Abigail"), Some(101));
}

#[test]
fn test_distant_character_gains_nothing() {
    let mut handler = PassiveFriendship::new(settings(2, 1, 1));
    let mut world = abigail_at(13, 13, 100);

    let outcomes = play(&mut handler, &mut world, 12);

    assert_eq!(world.points("Abigail"), Some(100));
    assert!(outcomes.iter().all(|o| o.grants.is_empty()));
}

#[test]
fn test_non_datable_grants_past_single_cap() {
    let mut handler = PassiveFriendship::new(settings(2, 3, 5));
    let mut world = FixtureWorld::new("Town", TilePosition::new(10, 10))
        .with_character("Town", "Pierre", TilePosition::new(10, 11), false)
        .with_relationship("Pierre", 2245, FriendshipStatus::Single);

    let outcomes = play(&mut handler, &mut world, 3);
    assert_eq!(outcomes.iter().filter(|o| o.boundary_reached).count(), 1);
    assert_eq!(world.points("Pierre"), Some(2245));

    let mut time = GameTime::new(630).unwrap();
    for _ in 0..3 {
        time = time.next().unwrap();
        handler.handle(&HostEvent::time_advanced(time), &mut world);
    }
    assert_eq!(world.points("Pierre"), Some(2250));
}

#[test]
fn test_married_grants_once_more_then_stops() {
    let mut handler = PassiveFriendship::new(settings(2, 1, 5));
    let mut world = FixtureWorld::new("FarmHouse", TilePosition::new(4, 4))
        .with_character("FarmHouse", "Harvey", TilePosition::new(5, 5), true)
        .with_relationship("Harvey", 3748, FriendshipStatus::Married);

    let outcomes = play(&mut handler, &mut world, 10);

    assert_eq!(world.points("Harvey"), Some(3753));
    let granted: usize = outcomes.iter().map(|o| o.grants.len()).sum();
    assert_eq!(granted, 1);
}

#[test]
fn test_points_never_pass_cap_plus_one_grant() {
    let grant = 7;
    let mut handler = PassiveFriendship::new(settings(3, 1, grant));
    let mut world = FixtureWorld::new("Town", TilePosition::new(0, 0))
        .with_character("Town", "Haley", TilePosition::new(1, 0), true)
        .with_character("Town", "Lewis", TilePosition::new(0, 2), false)
        .with_character("Town", "Emily", TilePosition::new(-3, 3), true)
        .with_relationship("Haley", 2000, FriendshipStatus::Single)
        .with_relationship("Lewis", 2600, FriendshipStatus::Single)
        .with_relationship("Emily", 2700, FriendshipStatus::Dating);

    play(&mut handler, &mut world, 110);

    let haley = world.points("Haley").unwrap();
    let lewis = world.points("Lewis").unwrap();
    let emily = world.points("Emily").unwrap();

    assert!(haley >= hearts::SINGLE_CAP && haley < hearts::SINGLE_CAP + grant as u32);
    assert!(lewis >= hearts::DATING_CAP && lewis < hearts::DATING_CAP + grant as u32);
    assert!(emily >= hearts::DATING_CAP && emily < hearts::DATING_CAP + grant as u32);
}

#[test]
fn test_untracked_characters_never_accrue() {
    let mut handler = PassiveFriendship::new(settings(2, 1, 1));
    let mut world = FixtureWorld::new("Farm", TilePosition::new(0, 0))
        .with_untracked_character("Farm", "Dog", TilePosition::new(0, 1))
        .with_relationship("Dog", 0, FriendshipStatus::Single);

    let outcomes = play(&mut handler, &mut world, 6);

    assert_eq!(world.points("Dog"), Some(0));
    assert!(outcomes.iter().all(|o| o.sampled == 0));
}

#[test]
fn test_walking_away_stops_accrual() {
    let mut handler = PassiveFriendship::new(settings(2, 1, 1));
    let mut world = abigail_at(11, 11, 100);

    play(&mut handler, &mut world, 3);
    assert_eq!(world.points("Abigail"), Some(102));

    world.move_character("Abigail", TilePosition::new(30, 30));
    let mut time = GameTime::new(630).unwrap();
    for _ in 0..4 {
        time = time.next().unwrap();
        handler.handle(&HostEvent::time_advanced(time), &mut world);
    }
    assert_eq!(world.points("Abigail"), Some(102));
}

#[test]
fn test_warp_samples_new_location() {
    let mut handler = PassiveFriendship::new(settings(2, 1, 1));
    let mut world = FixtureWorld::new("Town", TilePosition::new(10, 10))
        .with_character("Saloon", "Gus", TilePosition::new(10, 11), false)
        .with_relationship("Gus", 50, FriendshipStatus::Single);

    play(&mut handler, &mut world, 2);
    assert_eq!(world.points("Gus"), Some(50));

    handler.handle(&HostEvent::location_changed("Saloon"), &mut world);
    world.set_location(Some("Saloon"));
    let mut time = GameTime::new(620).unwrap();
    for _ in 0..2 {
        time = time.next().unwrap();
        handler.handle(&HostEvent::time_advanced(time), &mut world);
    }
    assert_eq!(world.points("Gus"), Some(51));
}

#[test]
fn test_missing_location_roster_reported_and_recovered() {
    let mut handler = PassiveFriendship::new(settings(2, 1, 1));
    let mut world = abigail_at(11, 11, 100);
    handler.handle(&HostEvent::day_started(GameDate::start()), &mut world);

    world.remove_location("Town");
    let outcome = handler
        .handle(&HostEvent::time_advanced(GameTime::new(610).unwrap()), &mut world)
        .unwrap();
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].kind(), ErrorKind::WorldStateUnavailable);

    // Later ticks keep running even though the location stays unresolvable.
    let outcome = handler
        .handle(&HostEvent::time_advanced(GameTime::new(620).unwrap()), &mut world)
        .unwrap();
    assert!(outcome.boundary_reached);
}
