use drift_core::angles::{normalize_degrees, shortest_arc};
use drift_core::player::player_inputs::DriveVector;
use glam::DVec2;

use crate::physics::vehicle::{Vehicle, VehicleTuning};

fn get_starting_vehicle() -> Vehicle {
    Vehicle::new(DVec2::new(800.0, 600.0), VehicleTuning::default())
}

// stick input that asks the car to face `heading` degrees
fn drive_toward(heading: f64) -> DriveVector {
    let radians = heading.to_radians();
    DriveVector::new(-radians.sin(), -radians.cos())
}

#[test]
fn test_accelerating_from_rest() {
    let mut car = get_starting_vehicle();
    car.step(DriveVector::new(1.0, 0.0), 1.0);

    // stick pushed right: nose turns one turn-rate step toward -90
    assert_eq!(car.facing_angle, -3.0);
    // movement trails facing by the drift factor
    assert!((car.movement_angle - -0.45).abs() < 1e-12);
    assert_eq!(car.speed, 0.2);
    assert_eq!(car.score, 0);

    // and the car moves along the movement angle, not the facing angle
    let heading = 0.45_f64.to_radians();
    let expected_position = DVec2::new(800.0, 600.0) + DVec2::new(heading.cos(), heading.sin()) * 0.2;
    assert!(car.position.abs_diff_eq(expected_position, 0.001));
}

#[test]
fn test_dead_zone_coasts() {
    for drive in [
        DriveVector::ZERO,
        DriveVector::new(0.2, 0.0),
        DriveVector::new(0.0, -0.1),
        DriveVector::new(0.1, 0.1),
    ] {
        let mut car = get_starting_vehicle();
        car.speed = 3.0;
        car.facing_angle = 40.0;
        car.movement_angle = 25.0;
        car.score = 17;

        car.step(drive, 1.0);

        assert!(car.speed < 3.0);
        assert_eq!(car.facing_angle, 40.0);
        assert_eq!(car.movement_angle, 25.0);
        assert_eq!(car.score, 17);
    }

    // already stopped stays stopped
    let mut car = get_starting_vehicle();
    car.step(DriveVector::ZERO, 1.0);
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.position, DVec2::new(800.0, 600.0));
}

#[test]
fn test_throttle_adds_acceleration_up_to_max() {
    for start_speed in [0.0, 1.3, 4.9, 5.0] {
        let mut car = get_starting_vehicle();
        car.speed = start_speed;
        car.step(DriveVector::new(0.0, -0.5), 1.0);
        assert_eq!(car.speed, f64::min(start_speed + 0.2, 5.0));
    }
}

#[test]
fn test_reaches_exactly_max_speed() {
    let mut car = get_starting_vehicle();
    for _ in 0..100 {
        car.step(DriveVector::new(1.0, 0.0), 1.0);
        assert!(car.speed <= car.tuning.max_speed);
    }
    assert_eq!(car.speed, car.tuning.max_speed);
}

#[test]
fn test_coasts_to_exactly_zero() {
    let mut car = Vehicle::new(
        DVec2::ZERO,
        VehicleTuning {
            friction: 0.25,
            ..VehicleTuning::default()
        },
    );
    car.speed = car.tuning.max_speed;

    // ceil(5.0 / 0.25) == 20 ticks
    for _ in 0..19 {
        car.step(DriveVector::ZERO, 1.0);
    }
    assert!(car.speed > 0.0);
    car.step(DriveVector::ZERO, 1.0);
    assert_eq!(car.speed, 0.0);

    for _ in 0..10 {
        car.step(DriveVector::ZERO, 1.0);
        assert_eq!(car.speed, 0.0);
    }
}

#[test]
fn test_default_tuning_stops_on_schedule() {
    let mut car = get_starting_vehicle();
    car.speed = car.tuning.max_speed;

    // ceil(5.0 / 0.05) == 100 ticks, even though 0.05 isn't exact in binary
    let expected_ticks = (car.tuning.max_speed / car.tuning.friction).ceil() as u32;
    assert_eq!(expected_ticks, 100);

    let mut ticks = 0;
    while car.speed > 0.0 {
        car.step(DriveVector::ZERO, 1.0);
        assert!(car.speed >= 0.0);
        ticks += 1;
        assert!(ticks <= 1000);
    }
    assert_eq!(ticks, expected_ticks);

    car.step(DriveVector::ZERO, 1.0);
    assert_eq!(car.speed, 0.0);
}

#[test]
fn test_turning_never_overshoots() {
    let mut car = get_starting_vehicle();
    car.facing_angle = 30.0;
    let drive = drive_toward(37.5);
    let target = drift_core::angles::heading_from_offset(drive.as_vec());

    car.step(drive, 1.0);
    assert!((car.facing_angle - 33.0).abs() < 1e-9);
    car.step(drive, 1.0);
    assert!((car.facing_angle - 36.0).abs() < 1e-9);
    // within one turn step now, so it lands on the target exactly
    car.step(drive, 1.0);
    assert_eq!(car.facing_angle, target);
    car.step(drive, 1.0);
    assert_eq!(car.facing_angle, target);
}

#[test]
fn test_reversal_takes_the_short_arc() {
    let mut car = get_starting_vehicle();
    car.facing_angle = 10.0;
    car.movement_angle = 10.0;
    let drive = drive_toward(-165.0);
    let target = drift_core::angles::heading_from_offset(drive.as_vec());

    // -175 degrees is shorter than +185, so the nose swings clockwise
    car.step(drive, 1.0);
    assert!((car.facing_angle - 7.0).abs() < 1e-9);

    let mut remaining = shortest_arc(target, car.facing_angle).abs();
    for _ in 0..100 {
        let before = car.facing_angle;
        car.step(drive, 1.0);
        let turned = shortest_arc(car.facing_angle, before);
        assert!(turned <= 0.0);
        assert!(turned.abs() <= car.tuning.turn_rate + 1e-9);

        let now_remaining = shortest_arc(target, car.facing_angle).abs();
        assert!(now_remaining <= remaining);
        remaining = now_remaining;
    }
    assert_eq!(car.facing_angle, target);
}

#[test]
fn test_movement_trails_facing() {
    let mut car = get_starting_vehicle();
    car.facing_angle = 170.0;
    car.movement_angle = -175.0;
    car.speed = 2.0;

    let drive = drive_toward(170.0);
    car.step(drive, 1.0);

    // the gap is -15 degrees across the seam, not +345; movement closes 15% of it
    let expected = normalize_degrees(-175.0 + shortest_arc(car.facing_angle, -175.0) * 0.15);
    assert!((car.movement_angle - expected).abs() < 1e-9);
    assert!((car.movement_angle - -177.25).abs() < 1e-6);
    assert!(car.drift_difference().abs() < 15.0);
}

#[test]
fn test_drifting_scores() {
    let mut car = get_starting_vehicle();
    car.facing_angle = 55.0;
    car.movement_angle = 0.0;
    car.speed = 4.0;

    car.step(drive_toward(55.0), 1.0);

    // floor(55 * 0.1) for the slide going into the tick
    assert_eq!(car.score, 5);
    assert!((car.movement_angle - 55.0 * 0.15).abs() < 1e-6);
}

#[test]
fn test_no_score_when_slow_or_straight() {
    // big slide but barely moving
    let mut car = get_starting_vehicle();
    car.facing_angle = 55.0;
    car.step(drive_toward(55.0), 1.0);
    assert_eq!(car.speed, 0.2);
    assert_eq!(car.score, 0);

    // fast but the slide is under the threshold
    let mut car = get_starting_vehicle();
    car.facing_angle = 8.0;
    car.speed = 4.0;
    car.step(drive_toward(8.0), 1.0);
    assert_eq!(car.score, 0);

    // coasting never scores, however sideways the car is
    let mut car = get_starting_vehicle();
    car.facing_angle = 90.0;
    car.speed = 4.0;
    car.step(DriveVector::ZERO, 1.0);
    assert_eq!(car.score, 0);
}

#[test]
fn test_score_never_decreases() {
    let mut car = get_starting_vehicle();
    let mut last_score = 0;
    for tick in 0..600 {
        // swing the stick around and occasionally let go
        let drive = if tick % 97 < 10 {
            DriveVector::ZERO
        } else {
            drive_toward((tick * 7 % 360) as f64)
        };
        car.step(drive, 1.0);
        assert!(car.score >= last_score);
        assert!(car.speed >= 0.0 && car.speed <= car.tuning.max_speed);
        last_score = car.score;
    }
    assert!(car.score > 0);
}

#[test]
fn test_half_ticks_match_full_ticks() {
    let mut full = get_starting_vehicle();
    full.facing_angle = 40.0;
    let mut halves = full.clone();

    let drive = drive_toward(40.0);
    full.step(drive, 1.0);
    halves.step(drive, 0.5);
    halves.step(drive, 0.5);

    assert_eq!(halves.speed, full.speed);
    assert!((halves.movement_angle - full.movement_angle).abs() < 1e-9);
    assert!((full.movement_angle - 6.0).abs() < 1e-9);
}

#[test]
fn test_half_ticks_score_like_full_ticks() {
    let mut full = get_starting_vehicle();
    full.facing_angle = 55.0;
    full.speed = 4.0;
    let mut halves = full.clone();

    let drive = drive_toward(55.0);
    full.step(drive, 1.0);
    halves.step(drive, 0.5);
    // points are only banked once a whole tick has passed
    assert_eq!(halves.score, 0);
    halves.step(drive, 0.5);

    // 55 * 0.1 for the full tick; 55 * 0.05 + ~50.7 * 0.05 for the halves
    assert_eq!(full.score, 5);
    assert_eq!(halves.score, 5);
}

#[test]
fn test_half_ticks_keep_small_slides_scoring() {
    // a 15 degree slide is worth under one point per half tick
    let mut full = get_starting_vehicle();
    full.facing_angle = 15.0;
    full.speed = 4.0;
    let mut halves = full.clone();

    let drive = drive_toward(15.0);
    for _ in 0..10 {
        full.step(drive, 1.0);
    }
    for _ in 0..20 {
        halves.step(drive, 0.5);
    }

    assert_eq!(full.score, 3);
    assert!(halves.score > 0);
    assert!(halves.score + 1 >= full.score && halves.score <= full.score);
}
