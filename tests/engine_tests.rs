// Host-side tests for target activation, the settings operations exposed by
// the engine, and broadcast through the shared handle.
mod common;

use common::core::handle::{self, CursorHandle};
use common::core::{
    Changes, CursorEngine, CursorError, CursorSettings, CursorVariant, Toggle, Tunable,
};
use common::mouse;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ---------------- Target activation ----------------
#[test]
fn stale_deactivate_keeps_active_target() {
    let mut engine = CursorEngine::new(0.0);
    engine.activate_target("a", Some(CursorVariant::Link));
    assert_eq!(engine.deactivate_target("b"), Changes::NONE);
    assert_eq!(engine.state().active_target.as_deref(), Some("a"));
    assert_eq!(engine.state().variant, CursorVariant::Link);
}

#[test]
fn matching_deactivate_clears_and_resets_variant() {
    let mut engine = CursorEngine::new(0.0);
    engine.activate_target("a", Some(CursorVariant::Inspect));
    assert_eq!(engine.deactivate_target("a"), Changes::STATE);
    assert_eq!(engine.state().active_target, None);
    assert_eq!(engine.state().variant, CursorVariant::Default);
}

#[test]
fn late_leave_from_previous_sibling_is_ignored() {
    let mut engine = CursorEngine::new(0.0);
    engine.activate_target("card-1", Some(CursorVariant::Link));
    // Pointer crosses into the neighbour before card-1's leave arrives
    engine.activate_target("card-2", Some(CursorVariant::Control));
    engine.deactivate_target("card-1");
    assert_eq!(engine.state().active_target.as_deref(), Some("card-2"));
    assert_eq!(engine.state().variant, CursorVariant::Control);
}

#[test]
fn activate_without_variant_keeps_mode() {
    let mut engine = CursorEngine::new(0.0);
    engine.set_variant(CursorVariant::Drag);
    engine.activate_target("canvas", None);
    assert_eq!(engine.state().variant, CursorVariant::Drag);
    assert_eq!(engine.state().active_target.as_deref(), Some("canvas"));
}

#[test]
fn deactivate_with_nothing_active_is_a_no_op() {
    let mut engine = CursorEngine::new(0.0);
    engine.set_variant(CursorVariant::Inspect);
    assert_eq!(engine.deactivate_target("a"), Changes::NONE);
    assert_eq!(engine.state().variant, CursorVariant::Inspect);
}

#[test]
fn variant_names_round_trip() {
    for v in CursorVariant::ALL {
        assert_eq!(v.as_str().parse::<CursorVariant>().ok(), Some(v));
    }
    assert!(matches!(
        "hover".parse::<CursorVariant>(),
        Err(CursorError::UnknownVariant(name)) if name == "hover"
    ));
}

// ---------------- Settings through the engine ----------------
#[test]
fn toggling_twice_restores_flag() {
    let mut engine = CursorEngine::new(0.0);
    for key in Toggle::ALL {
        let original = engine.settings().is_enabled(key);
        assert_eq!(engine.toggle_setting(key), Changes::SETTINGS);
        assert_eq!(engine.settings().is_enabled(key), !original);
        engine.toggle_setting(key);
        assert_eq!(engine.settings().is_enabled(key), original);
    }
}

#[test]
fn numeric_set_reads_back_exactly() {
    let mut engine = CursorEngine::new(0.0);
    for (i, key) in Tunable::ALL.into_iter().enumerate() {
        let value = 0.1234567891 * (i as f64 + 1.0) - 0.5;
        engine.set_setting(key, value);
        assert_eq!(engine.settings().get(key), value);
    }
    // No clamping at the store layer
    engine.set_setting(Tunable::InertiaIntensity, 7.5);
    assert_eq!(engine.settings().inertia_intensity, 7.5);
    engine.set_setting(Tunable::ParallaxIntensity, -40.0);
    assert_eq!(engine.settings().parallax_intensity, -40.0);
}

#[test]
fn setting_same_value_reports_no_change() {
    let mut engine = CursorEngine::new(0.0);
    assert_eq!(engine.set_setting(Tunable::DragFactor, 0.18), Changes::NONE);
    assert_eq!(engine.set_named("dragFactor", 0.18).ok(), Some(Changes::NONE));
}

#[test]
fn named_operations_reject_wrong_kind() {
    let mut engine = CursorEngine::new(0.0);
    let before = *engine.settings();

    assert!(matches!(
        engine.toggle_named("parallaxIntensity"),
        Err(CursorError::NotToggle(_))
    ));
    assert!(matches!(
        engine.set_named("magnetic", 0.0),
        Err(CursorError::NotTunable(_))
    ));
    assert!(matches!(
        engine.set_named("warpFactor", 9.0),
        Err(CursorError::UnknownSetting(_))
    ));
    assert_eq!(engine.settings(), &before);

    assert_eq!(engine.toggle_named("trails").ok(), Some(Changes::SETTINGS));
    assert!(!engine.settings().trails);
    engine.set_named("rippleStrength", 0.2).ok();
    assert_eq!(engine.settings().ripple_strength, 0.2);
}

#[test]
fn settings_changes_leave_state_alone() {
    let mut engine = CursorEngine::with_settings(CursorSettings::default(), 0.0);
    engine.pointer_move(mouse(40.0, 40.0, 20.0));
    let state = engine.state().clone();
    engine.toggle_setting(Toggle::Spotlight);
    engine.set_setting(Tunable::FluxIntensity, 0.1);
    assert_eq!(engine.state(), &state);
}

// ---------------- Handle and broadcast ----------------
#[test]
fn subscribers_see_each_change_once() {
    let handle = CursorHandle::new(CursorEngine::new(0.0));
    let seen: Rc<RefCell<Vec<Changes>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_in = seen.clone();
    let _sub = handle.subscribe(move |_snapshot, changes| seen_in.borrow_mut().push(changes));

    handle.update(|e| e.pointer_move(mouse(10.0, 10.0, 20.0)));
    handle.toggle_setting(Toggle::Magnetic);
    handle.deactivate_target("nobody");
    handle.set_setting(Tunable::DragFactor, 0.18);

    assert_eq!(*seen.borrow(), vec![Changes::STATE, Changes::SETTINGS]);
}

#[test]
fn snapshot_matches_engine_at_notification_time() {
    let handle = CursorHandle::new(CursorEngine::new(0.0));
    let reader = handle.clone();
    let mismatches = Rc::new(Cell::new(0));
    let mismatches_in = mismatches.clone();
    let _sub = handle.subscribe(move |snapshot, _| {
        if *snapshot != reader.snapshot() {
            mismatches_in.set(mismatches_in.get() + 1);
        }
    });

    for i in 1..=5 {
        handle.update(|e| e.pointer_move(mouse(30.0 * i as f64, 0.0, 20.0 * i as f64)));
        handle.update(|e| e.frame(20.0 * i as f64 + 8.0));
    }
    handle.activate_target("grid", Some(CursorVariant::Link));
    assert_eq!(mismatches.get(), 0);
}

#[test]
fn dropping_subscription_stops_notifications() {
    let handle = CursorHandle::new(CursorEngine::new(0.0));
    let count = Rc::new(Cell::new(0));
    let count_in = count.clone();
    let sub = handle.subscribe(move |_, _| count_in.set(count_in.get() + 1));
    assert_eq!(handle.subscriber_count(), 1);

    handle.update(|e| e.pointer_enter());
    sub.unsubscribe();
    assert_eq!(handle.subscriber_count(), 0);
    handle.set_variant(CursorVariant::Drag);
    assert_eq!(count.get(), 1);
}

#[test]
fn subscriber_may_call_back_into_handle() {
    let handle = CursorHandle::new(CursorEngine::new(0.0));
    let inner = handle.clone();
    let _sub = handle.subscribe(move |snapshot, changes| {
        // Promote any focused target to the control mode
        if changes.state
            && snapshot.state.active_target.is_some()
            && snapshot.state.variant != CursorVariant::Control
        {
            inner.set_variant(CursorVariant::Control);
        }
    });

    handle.activate_target("panel", Some(CursorVariant::Link));
    assert_eq!(handle.state().variant, CursorVariant::Control);
}

#[test]
fn republish_primes_all_subscribers() {
    let handle = CursorHandle::new(CursorEngine::new(0.0));
    let seen = Rc::new(Cell::new(Changes::NONE));
    let seen_in = seen.clone();
    let _sub = handle.subscribe(move |_, changes| seen_in.set(changes));
    handle.republish();
    assert_eq!(seen.get(), Changes::STATE | Changes::SETTINGS);
}

#[test]
fn try_update_propagates_errors_without_notifying() {
    let handle = CursorHandle::new(CursorEngine::new(0.0));
    let count = Rc::new(Cell::new(0));
    let count_in = count.clone();
    let _sub = handle.subscribe(move |_, _| count_in.set(count_in.get() + 1));

    assert!(handle.try_update(|e| e.toggle_named("fluxIntensity")).is_err());
    assert_eq!(count.get(), 0);
    assert!(handle.try_update(|e| e.set_named("fluxIntensity", 0.9)).is_ok());
    assert_eq!(count.get(), 1);
    assert_eq!(handle.settings().flux_intensity, 0.9);
}

// ---------------- Process-wide access point ----------------
#[test]
fn try_current_reports_missing_engine() {
    handle::uninstall();
    assert!(matches!(handle::try_current(), Err(CursorError::NotInstalled)));
}

#[test]
#[should_panic(expected = "cursor engine used before start()")]
fn current_fails_fast_without_engine() {
    handle::uninstall();
    let _ = handle::current();
}

#[test]
fn installed_handle_is_shared() {
    let handle = CursorHandle::new(CursorEngine::new(0.0));
    assert!(handle::install(handle.clone()).is_none());

    handle::current().activate_target("hero", None);
    assert_eq!(handle.state().active_target.as_deref(), Some("hero"));

    assert!(handle::uninstall().is_some());
    assert!(handle::try_current().is_err());
}
