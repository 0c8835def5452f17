/// Angle helpers shared by the movement controller and its tests.
///
/// Angles are kept in degrees throughout the controller (the motion rig was
/// authored that way) and only converted to radians at trig call sites.

/// Sign-preserving wrap of an angle into (-360, 360).
pub fn wrap_degrees(angle: f32) -> f32 {
    angle % 360.0
}

/// One step of the forward-vector convention: angle 0 moves along -Z,
/// angle 90 along -X. Returns the (dx, dz) displacement for `speed`.
pub fn forward_step(angle_deg: f32, speed: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (-rad.sin() * speed, -rad.cos() * speed)
}
