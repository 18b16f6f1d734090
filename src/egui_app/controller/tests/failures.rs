use super::super::test_support::{
    canonical, controller_with, fast_settings, gated_engine, poll_until, poll_until_settled,
    wait_for_flag,
};
use super::super::*;
use crate::analysis::{AnalysisFailure, CredibilityStatus, RecordError};
use std::sync::atomic::Ordering;

#[test]
fn timeout_returns_to_idle_with_timed_out_error() {
    let (engine, _release) = gated_engine(Ok(canonical(85)));
    let mut settings = fast_settings();
    settings.analysis.timeout_ms = 30;
    let mut controller = controller_with(
        Arc::clone(&engine) as Arc<dyn AnalysisEngine>,
        &settings,
    );
    controller.set_text("never finishes");
    controller.trigger();
    poll_until_settled(&mut controller);

    assert_eq!(controller.phase(), SessionPhase::Idle);
    assert_eq!(
        controller.last_error(),
        Some(&SessionError::Failure(AnalysisFailure::TimedOut {
            after: Duration::from_millis(30)
        }))
    );
    assert_eq!(controller.ui.status.badge_label, "Error");
    assert!(wait_for_flag(&engine.saw_cancel));
    assert!(controller.is_triggerable());
}

#[test]
fn cancelled_analysis_ignores_late_result() {
    let (engine, release) = gated_engine(Ok(canonical(15)));
    let mut controller = controller_with(
        Arc::clone(&engine) as Arc<dyn AnalysisEngine>,
        &fast_settings(),
    );
    controller.set_text("cancel me");
    controller.trigger();
    controller.cancel_analysis();
    assert_eq!(controller.phase(), SessionPhase::Idle);
    assert_eq!(controller.ui.status.text, "Analysis cancelled");

    let _ = release.send(());
    assert!(wait_for_flag(&engine.saw_cancel));
    assert!(!poll_until(&mut controller, |c| c.current_result().is_some()));
    assert!(controller.last_error().is_none());
}

#[test]
fn cancel_after_previous_result_restores_done() {
    let (engine, release) = gated_engine(Ok(canonical(35)));
    let mut controller = controller_with(engine, &fast_settings());
    controller.set_text("first");
    controller.trigger();
    release.send(()).unwrap();
    poll_until_settled(&mut controller);

    controller.trigger();
    assert_eq!(controller.phase(), SessionPhase::Analyzing);
    controller.cancel_analysis();
    assert_eq!(controller.phase(), SessionPhase::Done);
    assert_eq!(controller.current_result().unwrap().credibility_score, 35);
}

#[test]
fn cancel_without_running_analysis_does_nothing() {
    let (engine, _release) = gated_engine(Ok(canonical(35)));
    let mut controller = controller_with(engine, &fast_settings());
    controller.cancel_analysis();
    assert_eq!(controller.phase(), SessionPhase::Idle);
    assert_eq!(controller.ui.status.badge_label, "Idle");
}

#[test]
fn backend_failure_keeps_previous_result() {
    let (good_engine, release) = gated_engine(Ok(canonical(85)));
    let mut controller = controller_with(good_engine, &fast_settings());
    controller.set_text("first");
    controller.trigger();
    release.send(()).unwrap();
    poll_until_settled(&mut controller);
    let previous = Arc::clone(controller.current_result().unwrap());

    let (failing_engine, release) = gated_engine(Err(AnalysisFailure::Backend {
        message: "service unavailable".into(),
    }));
    controller.engine = failing_engine;
    controller.trigger();
    release.send(()).unwrap();
    poll_until_settled(&mut controller);

    assert_eq!(controller.phase(), SessionPhase::Idle);
    assert!(Arc::ptr_eq(controller.current_result().unwrap(), &previous));
    assert!(matches!(
        controller.last_error(),
        Some(SessionError::Failure(AnalysisFailure::Backend { .. }))
    ));
    assert!(controller.ui.status.text.contains("service unavailable"));
}

#[test]
fn malformed_record_is_reported_instead_of_rendered() {
    let mut record = (*canonical(85)).clone();
    record.status = CredibilityStatus::Misleading;
    let (engine, release) = gated_engine(Ok(Arc::new(record)));
    let mut controller = controller_with(engine, &fast_settings());
    controller.set_text("inconsistent");
    controller.trigger();
    release.send(()).unwrap();
    poll_until_settled(&mut controller);

    assert!(controller.current_result().is_none());
    assert!(controller.result_view().is_none());
    assert!(matches!(
        controller.last_error(),
        Some(SessionError::Failure(AnalysisFailure::MalformedRecord(
            RecordError::StatusBandMismatch { .. }
        )))
    ));
}

#[test]
fn dropping_controller_cancels_worker() {
    let (engine, _release) = gated_engine(Ok(canonical(85)));
    let mut controller = controller_with(
        Arc::clone(&engine) as Arc<dyn AnalysisEngine>,
        &fast_settings(),
    );
    controller.set_text("abandoned");
    controller.trigger();
    drop(controller);
    assert!(wait_for_flag(&engine.saw_cancel));
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
}
