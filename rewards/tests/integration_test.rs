//! End to end checks of the public reward API.

use go_green_rewards::achievements::Achievement;
use go_green_rewards::calculator::mock::{generate_coordinate_near, generate_coordinates};
use go_green_rewards::calculator::EARTH_RADIUS_KM;
use go_green_rewards::goals::MonthlyGoals;
use go_green_rewards::leaderboard::{rank, LeaderboardEntry};
use go_green_rewards::profile::UserProfile;
use go_green_rewards::*;

#[test]
fn test_distance_properties_hold_for_random_coordinates() {
    let max = std::f64::consts::PI * EARTH_RADIUS_KM;
    let coordinates = generate_coordinates(200);

    for pair in coordinates.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(distance_km(a, a), 0.0);

        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        assert!((forward - backward).abs() < 1e-9, "{a} <-> {b}");
        assert!(forward >= 0.0);
        assert!(forward <= max + 1e-9);
    }
}

#[test]
fn test_short_trip_rewards() {
    let home = Coordinate::new(52.3676, 4.9041).unwrap();
    for _ in 0..50 {
        let stop = generate_coordinate_near(&home, 2.0);
        let trip = plan_trip(Some(home), Some(stop)).unwrap();
        assert!(trip.distance_km <= 2.01);
        assert!(trip.points_earned <= 21);
        assert_eq!(trip.trees_equivalent, 0);
    }
}

#[test]
fn test_trip_updates_profile_goals_and_achievements() {
    // London to Oxford, roughly 80 km
    let london: Coordinate = "51.5074,-0.1278".parse().unwrap();
    let oxford: Coordinate = "51.7520,-1.2577".parse().unwrap();

    let trip = plan_trip(Some(london), Some(oxford)).unwrap();
    assert!((trip.distance_km - 82.0).abs() < 3.0);

    let before = UserProfile::new(50, 1.0, 0);
    assert!(Achievement::earned(&before).is_empty());

    let after = before.record_trip(&trip);
    assert_eq!(after.points, 50 + trip.points_earned);
    assert_eq!(after.trips_logged, 1);
    assert_eq!(
        Achievement::earned(&after),
        vec![
            Achievement::FirstJourney,
            Achievement::FirstHundredPoints,
            Achievement::EcoWarrior,
        ]
    );

    let progress = MonthlyGoals::from(&Config::new()).progress(&after);
    assert_eq!(progress.trips_percent, 5);
    assert!(progress.points_percent > 80);
}

#[test]
fn test_leaderboard_after_trips() {
    let trip = compute_reward(25.0).unwrap();

    let mut alice = UserProfile::default();
    let mut bob = UserProfile::default();
    for _ in 0..3 {
        alice = alice.record_trip(&trip);
    }
    bob = bob.record_trip(&trip);

    let entries = vec![
        LeaderboardEntry {
            email: "bob@example.com".to_string(),
            points: bob.points,
            total_carbon_saved_kg: bob.total_carbon_saved_kg,
        },
        LeaderboardEntry {
            email: "alice@example.com".to_string(),
            points: alice.points,
            total_carbon_saved_kg: alice.total_carbon_saved_kg,
        },
    ];

    let board = rank(entries, Config::new().leaderboard_size, Some("bob@example.com"));
    assert_eq!(board[0].display_name, "alice");
    assert_eq!(board[0].points, 750);
    assert_eq!(board[1].display_name, "bob");
    assert!(board[1].is_current_user);
}

#[test]
fn test_errors_are_reported_not_zeroed() {
    assert!(matches!(
        distance_between(0.0, 0.0, f64::NAN, 0.0),
        Err(RewardError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_reward(-0.5),
        Err(RewardError::InvalidInput(_))
    ));
    assert_eq!(
        plan_trip(None, Coordinate::new(1.0, 1.0).ok()),
        Err(TripError::UnresolvedStart)
    );
}
