pub const SNAP_DISTANCE_DEFAULT_PX: f32 = 25.0;
pub const SNAP_DISTANCE_MIN_PX: f32 = 4.0;
pub const SNAP_DISTANCE_MAX_PX: f32 = 80.0;

pub const ROTATION_TOLERANCE_DEFAULT_DEG: f32 = 15.0;
pub const ROTATION_TOLERANCE_MIN_DEG: f32 = 1.0;
pub const ROTATION_TOLERANCE_MAX_DEG: f32 = 45.0;

pub const ROTATION_STEP_DEFAULT_DEG: f32 = 10.0;
pub const ROTATION_STEP_MIN_DEG: f32 = 1.0;
pub const ROTATION_STEP_MAX_DEG: f32 = 90.0;

pub fn normalize_angle(mut angle: f32) -> f32 {
    angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

pub fn angle_delta(target: f32, current: f32) -> f32 {
    let mut diff = normalize_angle(target - current);
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

pub fn angle_diff(a: f32, b: f32) -> f32 {
    angle_delta(a, b).abs()
}

pub fn angle_matches(a: f32, b: f32, tolerance: f32) -> bool {
    angle_diff(a, b) <= tolerance
}

pub fn clamp_axis(value: f32, limit: f32) -> f32 {
    let limit = limit.max(0.0);
    value.max(0.0).min(limit)
}

pub fn clamp_to_container(
    pos: (f32, f32),
    size: (f32, f32),
    container: (f32, f32),
) -> (f32, f32) {
    (
        clamp_axis(pos.0, container.0 - size.0),
        clamp_axis(pos.1, container.1 - size.1),
    )
}

pub fn center_of(pos: (f32, f32), size: (f32, f32)) -> (f32, f32) {
    (pos.0 + size.0 * 0.5, pos.1 + size.1 * 0.5)
}

pub fn pos_for_center(center: (f32, f32), size: (f32, f32)) -> (f32, f32) {
    (center.0 - size.0 * 0.5, center.1 - size.1 * 0.5)
}

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

pub fn center_inside(center: (f32, f32), container: (f32, f32)) -> bool {
    center.0 >= 0.0 && center.0 <= container.0 && center.1 >= 0.0 && center.1 <= container.1
}
