use hamekomi_core::game::{
    angle_diff, angle_matches, center_inside, center_of, clamp_axis, clamp_to_container, distance,
    normalize_angle, pos_for_center,
};

#[test]
fn angle_diff_wraps_around() {
    assert_eq!(angle_diff(350.0, 5.0), 15.0);
    assert_eq!(angle_diff(10.0, 350.0), 20.0);
    assert_eq!(angle_diff(0.0, 0.0), 0.0);
    assert_eq!(angle_diff(0.0, 180.0), 180.0);
}

#[test]
fn angle_diff_handles_unnormalized_input() {
    assert_eq!(angle_diff(-10.0, 0.0), 10.0);
    assert_eq!(angle_diff(370.0, 0.0), 10.0);
    assert_eq!(angle_diff(725.0, 5.0), 0.0);
}

#[test]
fn normalize_angle_maps_into_circle() {
    assert_eq!(normalize_angle(0.0), 0.0);
    assert_eq!(normalize_angle(360.0), 0.0);
    assert_eq!(normalize_angle(-90.0), 270.0);
    assert_eq!(normalize_angle(725.0), 5.0);
}

#[test]
fn angle_matches_is_inclusive_at_tolerance() {
    assert!(angle_matches(15.0, 0.0, 15.0));
    assert!(angle_matches(345.0, 0.0, 15.0));
    assert!(!angle_matches(16.0, 0.0, 15.0));
}

#[test]
fn clamp_axis_keeps_offsets_non_negative() {
    assert_eq!(clamp_axis(-5.0, 100.0), 0.0);
    assert_eq!(clamp_axis(50.0, 100.0), 50.0);
    assert_eq!(clamp_axis(150.0, 100.0), 100.0);
    // A piece larger than the container pins to the origin.
    assert_eq!(clamp_axis(30.0, -40.0), 0.0);
}

#[test]
fn clamp_to_container_bounds_both_axes() {
    let size = (120.0, 92.0);
    let container = (640.0, 420.0);
    assert_eq!(
        clamp_to_container((-50.0, -10.0), size, container),
        (0.0, 0.0)
    );
    assert_eq!(
        clamp_to_container((9999.0, 9999.0), size, container),
        (520.0, 328.0)
    );
    assert_eq!(
        clamp_to_container((40.0, 54.0), size, container),
        (40.0, 54.0)
    );
}

#[test]
fn center_round_trips_through_position() {
    let size = (132.0, 56.0);
    let center = center_of((34.0, 26.0), size);
    assert_eq!(center, (100.0, 54.0));
    assert_eq!(pos_for_center(center, size), (34.0, 26.0));
}

#[test]
fn center_inside_is_inclusive_on_the_border() {
    let container = (640.0, 420.0);
    assert!(center_inside((0.0, 0.0), container));
    assert!(center_inside((640.0, 420.0), container));
    assert!(!center_inside((640.5, 100.0), container));
    assert!(!center_inside((100.0, -0.5), container));
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
    assert_eq!(distance((100.0, 95.0), (100.0, 100.0)), 5.0);
}
