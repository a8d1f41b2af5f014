use keyframe_curve_core::{
    BezierCurve, BezierKeyframe, Color, CurveValue, EulerAngles, LinearCurve, LinearKeyframe, Quat,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn norm4(q: [f32; 4]) -> f32 {
    (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt()
}

#[test]
fn f64_curve_matches_f32_shape() {
    let curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(0.0, 0.0_f64),
        BezierKeyframe::flat(1.0, 10.0_f64),
    ]);
    assert_eq!(curve.evaluate(0.5, false), 5.0);
    assert_eq!(curve.evaluate(3.0, false), 10.0);
}

#[test]
fn vectors_blend_componentwise() {
    let curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(0.0, [0.0_f32, 0.0]),
        BezierKeyframe::flat(2.0, [4.0, -8.0]),
    ]);
    assert_eq!(curve.evaluate(1.0, false), [2.0, -4.0]);

    let curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::new(0.0, [0.0_f32, 0.0, 0.0], [0.0; 3], [3.0, 0.0, -3.0]),
        BezierKeyframe::new(1.0, [3.0, 0.0, -3.0], [-3.0, 0.0, 3.0], [0.0; 3]),
    ]);
    let v = curve.evaluate(0.25, false);
    approx(v[0], 0.75, 1e-5);
    approx(v[1], 0.0, 1e-6);
    approx(v[2], -0.75, 1e-5);

    let v4 = <[f32; 4]>::tangent(&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0, -1.0, 0.0], 0.5);
    assert_eq!(v4, [1.5, 2.5, 2.5, 4.0]);
}

#[test]
fn color_blends_linearly_including_alpha() {
    let curve = LinearCurve::from_keyframes(vec![
        LinearKeyframe::new(0.0, Color::rgba(0.0, 0.0, 0.0, 1.0)),
        LinearKeyframe::new(1.0, Color::rgba(1.0, 0.5, 0.25, 0.0)),
    ]);
    let c = curve.evaluate(0.5, false).0;
    approx(c[0], 0.5, 1e-6);
    approx(c[1], 0.25, 1e-6);
    approx(c[2], 0.125, 1e-6);
    approx(c[3], 0.5, 1e-6);
}

#[test]
fn euler_angles_blend_per_axis() {
    let curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(0.0, EulerAngles([0.0, 0.0, 0.0])),
        BezierKeyframe::flat(1.0, EulerAngles([90.0, -30.0, 180.0])),
    ]);
    let e = curve.evaluate(0.5, false).0;
    approx(e[0], 45.0, 1e-4);
    approx(e[1], -15.0, 1e-4);
    approx(e[2], 90.0, 1e-4);
}

#[test]
fn quat_default_is_identity() {
    assert_eq!(Quat::default(), Quat::IDENTITY);
    let empty = BezierCurve::<Quat>::new();
    assert_eq!(empty.evaluate(1.0, false), Quat::IDENTITY);
}

#[test]
fn quat_curve_slerps_along_the_arc() {
    let z = [0.0, 0.0, 1.0];
    let q0 = Quat::IDENTITY;
    let q1 = Quat::from_axis_angle(z, std::f32::consts::FRAC_PI_2);
    // Tangents equal to the keyed orientations keep the handles on the keys.
    let curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::new(0.0, q0, q0, q0),
        BezierKeyframe::new(1.0, q1, q1, q1),
    ]);

    let mid = curve.evaluate(0.5, false).0;
    let expected = Quat::from_axis_angle(z, std::f32::consts::FRAC_PI_4).0;
    for i in 0..4 {
        approx(mid[i], expected[i], 1e-5);
    }

    for step in 0..=10 {
        let q = curve.evaluate(step as f32 * 0.1, false).0;
        approx(norm4(q), 1.0, 1e-4);
    }
}

#[test]
fn quat_interpolation_takes_shortest_arc() {
    let a = Quat::IDENTITY;
    // Same rotation as identity with flipped sign: the blend should stay at identity.
    let b = Quat([0.0, 0.0, 0.0, -1.0]);
    let q = Quat::interpolate(&a, &b, 0.5).0;
    approx(q[3].abs(), 1.0, 1e-6);
    approx(norm4(q), 1.0, 1e-6);
}
