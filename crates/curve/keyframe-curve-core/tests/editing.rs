use keyframe_curve_core::{BezierCurve, BezierKeyframe, CurveError, LinearCurve, LinearKeyframe};

fn times(curve: &BezierCurve<f32>) -> Vec<f32> {
    curve.keyframes().iter().map(|k| k.time).collect()
}

#[test]
fn add_keyframe_inserts_in_time_order() {
    let mut curve = BezierCurve::new();
    assert_eq!(curve.add_keyframe(BezierKeyframe::flat(1.0, 1.0_f32)), 0);
    assert_eq!(curve.add_keyframe(BezierKeyframe::flat(0.0, 0.0)), 0);
    assert_eq!(curve.add_keyframe(BezierKeyframe::flat(2.0, 2.0)), 2);
    assert_eq!(curve.add_keyframe(BezierKeyframe::flat(0.5, 0.5)), 1);
    assert_eq!(times(&curve), vec![0.0, 0.5, 1.0, 2.0]);
    assert!(curve.validate().is_ok());
}

#[test]
fn add_keyframe_places_ties_after_existing_keys() {
    let mut curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(0.0, 0.0_f32),
        BezierKeyframe::flat(1.0, 1.0),
    ]);
    let index = curve.add_keyframe(BezierKeyframe::flat(1.0, 9.0));
    assert_eq!(index, 2);
    assert_eq!(curve.keyframes()[1].value, 1.0);
    assert_eq!(curve.keyframes()[2].value, 9.0);
    // Evaluation at the shared time picks the later key.
    assert_eq!(curve.evaluate(1.0, false), 9.0);
}

#[test]
fn remove_keyframe_checks_bounds() {
    let mut curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(0.0, 0.0_f32),
        BezierKeyframe::flat(1.0, 1.0),
    ]);
    let removed = curve.remove_keyframe(0).expect("index 0 exists");
    assert_eq!(removed.time, 0.0);
    assert_eq!(curve.len(), 1);
    assert_eq!(
        curve.remove_keyframe(3),
        Err(CurveError::IndexOutOfRange { index: 3, len: 1 })
    );
}

#[test]
fn set_keyframe_time_moves_and_reorders() {
    let mut curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(0.0, 0.0_f32),
        BezierKeyframe::flat(1.0, 1.0),
        BezierKeyframe::flat(2.0, 2.0),
    ]);
    let index = curve.set_keyframe_time(0, 1.5).expect("move key 0");
    assert_eq!(index, 1);
    assert_eq!(times(&curve), vec![1.0, 1.5, 2.0]);
    assert_eq!(curve.keyframes()[1].value, 0.0);

    assert!(matches!(
        curve.set_keyframe_time(0, f32::NAN),
        Err(CurveError::NonFiniteTime { index: 0, .. })
    ));
    assert!(matches!(
        curve.set_keyframe_time(9, 0.0),
        Err(CurveError::IndexOutOfRange { index: 9, len: 3 })
    ));
    assert_eq!(curve.len(), 3);
}

#[test]
fn sort_restores_order_after_direct_edits() {
    let mut curve = LinearCurve::from_keyframes(vec![
        LinearKeyframe::new(0.0, 0.0_f32),
        LinearKeyframe::new(1.0, 1.0),
        LinearKeyframe::new(2.0, 2.0),
    ]);
    curve.keyframes_mut()[0].time = 3.0;
    assert!(curve.validate().is_err());

    curve.sort();
    let times: Vec<f32> = curve.keyframes().iter().map(|k| k.time).collect();
    assert_eq!(times, vec![1.0, 2.0, 3.0]);
    assert_eq!(curve.keyframes()[2].value, 0.0);
    assert!(curve.validate().is_ok());
}

#[test]
fn sort_is_stable_for_equal_times() {
    let mut curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(1.0, 10.0_f32),
        BezierKeyframe::flat(1.0, 20.0),
        BezierKeyframe::flat(0.0, 0.0),
    ]);
    curve.sort();
    let values: Vec<f32> = curve.keyframes().iter().map(|k| k.value).collect();
    assert_eq!(values, vec![0.0, 10.0, 20.0]);
}

#[test]
fn try_from_keyframes_rejects_bad_times() {
    let unsorted = BezierCurve::try_from_keyframes(vec![
        BezierKeyframe::flat(0.0, 0.0_f32),
        BezierKeyframe::flat(2.0, 1.0),
        BezierKeyframe::flat(1.0, 2.0),
    ]);
    assert_eq!(
        unsorted,
        Err(CurveError::UnsortedKeyframes {
            index: 2,
            previous: 2.0,
            time: 1.0
        })
    );

    let infinite = BezierCurve::try_from_keyframes(vec![BezierKeyframe::flat(
        f32::INFINITY,
        0.0_f32,
    )]);
    assert!(matches!(
        infinite,
        Err(CurveError::NonFiniteTime { index: 0, .. })
    ));

    let ties = BezierCurve::try_from_keyframes(vec![
        BezierKeyframe::flat(0.5, 0.0_f32),
        BezierKeyframe::flat(0.5, 1.0),
    ]);
    assert!(ties.is_ok());
}

#[test]
fn time_range_and_duration() {
    let empty = BezierCurve::<f32>::new();
    assert_eq!(empty.time_range(), None);
    assert_eq!(empty.duration(), 0.0);

    let curve = BezierCurve::from_keyframes(vec![
        BezierKeyframe::flat(0.5, 0.0_f32),
        BezierKeyframe::flat(2.0, 1.0),
    ]);
    assert_eq!(curve.time_range(), Some((0.5, 2.0)));
    // The evaluation domain always starts at 0.
    assert_eq!(curve.duration(), 2.0);
}

#[test]
fn error_messages_name_the_offending_key() {
    let err = CurveError::UnsortedKeyframes {
        index: 4,
        previous: 1.5,
        time: 1.0,
    };
    assert_eq!(
        err.to_string(),
        "keyframe 4 at time 1 precedes previous keyframe time 1.5"
    );
    let err = CurveError::IndexOutOfRange { index: 2, len: 2 };
    assert_eq!(err.to_string(), "keyframe index 2 out of range (len 2)");
}
