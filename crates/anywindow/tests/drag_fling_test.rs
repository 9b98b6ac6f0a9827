use anywindow::{
    ControllerConfig, DragController, DragState, Fence, IntPoint, IntSize, PlacementHint,
};
use anywindow_testing::prelude::*;

type Robot = GestureRobot<DragController<RecordingSink, ManualClock>>;

fn robot_with_sink() -> (Robot, RecordingSink) {
    let clock = ManualClock::new();
    let sink = RecordingSink::new();
    let fence = Fence::new(0, 0, 1000, 2000).expect("valid fence");
    let mut controller =
        DragController::new(ControllerConfig::default(), fence, sink.clone(), clock.clone())
            .expect("valid config");
    controller
        .set_overlay_size(IntSize::new(200, 200))
        .expect("valid size");
    (GestureRobot::new(controller, clock), sink)
}

#[test]
fn release_flings_to_right_edge_along_release_direction() {
    let (mut robot, sink) = robot_with_sink();
    robot
        .target_mut()
        .show(PlacementHint::Absolute(IntPoint::new(700, 900)));

    robot.press(100.0, 100.0);
    robot.move_to(100.0, 112.0, 10);
    robot.move_to(100.0, 137.0, 10);
    assert_eq!(robot.target().position(), IntPoint::new(700, 925));

    // pause long enough that only the final stroke counts toward velocity
    robot.wait(60);
    robot.drag_to((150.0, 162.0), 5, 10);
    assert_eq!(robot.target().position(), IntPoint::new(750, 950));

    sink.clear();
    robot.release();
    assert_eq!(robot.target().state(), DragState::Flinging);
    let plan = robot.target().last_fling_plan().expect("plan at release");
    assert_eq!((plan.target_x, plan.target_y), (800.0, 975.0));

    robot.settle();
    let fling = sink.positions();
    assert_eq!(fling.first(), Some(&IntPoint::new(750, 950)));
    assert_eq!(fling.last(), Some(&IntPoint::new(800, 975)));
    assert!(fling.len() <= 18, "fling applied {} frames", fling.len());
    assert_monotone_toward(&fling, IntPoint::new(800, 975), "fling");
    assert_inside_fence(robot.target().fence(), &fling, "fling");
    assert_eq!(robot.target().state(), DragState::Idle);
}

#[test]
fn release_on_left_half_snaps_to_left_edge() {
    let (mut robot, _) = robot_with_sink();
    robot
        .target_mut()
        .show(PlacementHint::Absolute(IntPoint::new(300, 1000)));

    robot.fling((500.0, 500.0), (400.0, 500.0), 5, 10);
    robot.settle();

    assert_eq!(robot.target().position(), IntPoint::new(0, 1000));
}

#[test]
fn wild_drags_never_leave_the_fence() {
    let (mut robot, sink) = robot_with_sink();
    robot.target_mut().show_default();

    let strokes = [
        ((500.0, 500.0), (5000.0, 500.0)),
        ((500.0, 500.0), (500.0, -4000.0)),
        ((10.0, 10.0), (-900.0, 2500.0)),
        ((900.0, 1900.0), (1300.0, 1950.0)),
        ((0.0, 0.0), (-50.0, 40.0)),
    ];
    for (from, to) in strokes {
        robot.fling(from, to, 8, 8);
        robot.settle();
        robot.wait(100);
    }

    assert!(!sink.is_empty());
    assert_inside_fence(robot.target().fence(), &sink.positions(), "wild drags");
}

#[test]
fn tick_after_fling_finishes_applies_nothing() {
    let (mut robot, sink) = robot_with_sink();
    robot.target_mut().show_default();
    robot.fling((500.0, 500.0), (420.0, 560.0), 4, 12);
    robot.settle();

    let applied = sink.len();
    for _ in 0..5 {
        assert!(!robot.frame());
    }
    assert_eq!(sink.len(), applied);
    assert_eq!(robot.target().state(), DragState::Idle);
}

#[test]
fn press_during_fling_stops_it_and_next_drag_starts_there() {
    let (mut robot, sink) = robot_with_sink();
    robot
        .target_mut()
        .show(PlacementHint::Absolute(IntPoint::new(200, 800)));
    robot.fling((300.0, 300.0), (200.0, 350.0), 5, 10);
    robot.frame();
    robot.frame();

    let interrupted_at = robot.target().position();
    robot.press(600.0, 600.0);
    assert_eq!(robot.target().state(), DragState::Idle);

    let applied = sink.len();
    assert!(!robot.frame());
    assert_eq!(sink.len(), applied);

    robot.move_to(620.0, 600.0, 10);
    let origin = robot.target().drag_origin().expect("drag started");
    assert_eq!(origin.start, interrupted_at.to_point());

    robot.move_to(630.0, 610.0, 10);
    assert_eq!(
        robot.target().position(),
        IntPoint::new(interrupted_at.x + 10, interrupted_at.y + 10)
    );
}

#[test]
fn tap_does_not_move_or_fling() {
    let (mut robot, sink) = robot_with_sink();
    robot.target_mut().show_default();
    sink.clear();

    robot.tap(500.0, 500.0);
    assert_eq!(robot.settle(), 0);
    assert!(sink.is_empty());
    assert_eq!(robot.target().last_fling_plan(), None);
}

#[test]
fn cancel_ends_drag_without_fling() {
    let (mut robot, _) = robot_with_sink();
    robot.target_mut().show_default();
    robot.drag((500.0, 500.0), (420.0, 500.0), 4, 10);
    assert_eq!(robot.target().state(), DragState::Dragging);

    robot.cancel();
    robot.release();
    assert_eq!(robot.target().state(), DragState::Idle);
    assert_eq!(robot.target().last_fling_plan(), None);
}

#[test]
fn failing_sink_does_not_derail_the_gesture() {
    let (mut robot, sink) = robot_with_sink();
    robot
        .target_mut()
        .show(PlacementHint::Absolute(IntPoint::new(700, 900)));
    sink.set_failing(true);

    robot.fling((100.0, 100.0), (160.0, 130.0), 6, 10);
    robot.settle();

    assert!(sink.rejected() > 0);
    assert_eq!(robot.target().state(), DragState::Idle);
    assert_eq!(robot.target().position().x, 800);
}
