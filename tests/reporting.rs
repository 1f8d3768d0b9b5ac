mod common;

use common::*;
use wallsit::events::{SessionReport, WorkoutState};

fn rig_in_rest() -> Rig {
    let mut rig = Rig::new(10.0);
    rig.click(RIGHT);
    rig.run_until(10_200);
    rig.click(RIGHT);
    rig.run_until(26_000);
    assert_eq!(rig.control.controller().workout_state(), WorkoutState::Rest);
    rig
}

#[test]
fn report_click_in_rest_sends_session_result() {
    let mut rig = rig_in_rest();
    rig.click(LEFT);

    assert_eq!(
        rig.reporter.sent,
        vec![SessionReport {
            session_percentage: 100,
            session_number: 1
        }]
    );
    assert_eq!(rig.control.controller().workout_state(), WorkoutState::Rest);
}

#[test]
fn report_click_outside_rest_sends_nothing() {
    let mut rig = Rig::new(10.0);
    rig.click(LEFT);
    rig.click(RIGHT);
    rig.click(LEFT);
    assert!(rig.reporter.sent.is_empty());
}

#[test]
fn failed_report_is_dropped_without_side_effects() {
    let mut rig = rig_in_rest();
    rig.reporter.fail = true;
    rig.click(LEFT);
    rig.click(LEFT);

    assert!(rig.reporter.sent.is_empty());
    assert_eq!(rig.control.controller().workout_state(), WorkoutState::Rest);

    // Next session starts normally.
    rig.reporter.fail = false;
    rig.click(RIGHT);
    assert_eq!(rig.control.controller().workout_state(), WorkoutState::Workout);
    rig.run_until(42_000);
    rig.click(LEFT);
    assert_eq!(rig.reporter.sent.len(), 1);
    assert_eq!(rig.reporter.sent[0].session_number, 2);
}
