use super::*;
use std::thread;

#[test]
fn test_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    limits.start();
    assert!(!limits.budget.check_time());
}

#[test]
fn test_limits_time_only() {
    let limits = SearchLimits::time(Duration::from_millis(250));
    assert_eq!(limits.depth, u8::MAX);
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
}

#[test]
fn test_budget_expiry() {
    let budget = TimeBudget::new(Some(Duration::from_millis(10)));
    budget.start();
    assert!(!budget.is_stopped());

    thread::sleep(Duration::from_millis(20));
    assert!(budget.check_time());
    assert!(budget.is_stopped());
}

#[test]
fn test_budget_without_limit_never_expires() {
    let budget = TimeBudget::new(None);
    budget.start();
    thread::sleep(Duration::from_millis(10));
    assert!(!budget.check_time());
    assert!(!budget.is_stopped());
}

#[test]
fn test_budget_manual_stop() {
    let budget = TimeBudget::new(None);
    budget.start();
    budget.stop();
    assert!(budget.is_stopped());
    assert!(budget.check_time());
}

#[test]
fn test_restart_clears_stop_flag_and_rearms_deadline() {
    let budget = TimeBudget::new(Some(Duration::from_millis(50)));
    budget.start();
    budget.stop();
    budget.start();
    assert!(!budget.is_stopped());
    assert!(!budget.check_time(), "fresh deadline lies in the future");
}

#[test]
fn test_unstarted_budget_does_not_stop() {
    // A budget that was never armed has no deadline to blow.
    let budget = TimeBudget::new(Some(Duration::from_millis(1)));
    thread::sleep(Duration::from_millis(5));
    assert!(!budget.check_time());
}
