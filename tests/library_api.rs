//! Exercises the library entry points against a real working directory.
//!
//! These functions resolve the draft store from the current directory,
//! so every test switches into an isolated one and runs serially.

mod common;

use common::TestContext;
use serial_test::serial;

use provision::AppError;

#[test]
#[serial]
fn review_renders_the_saved_draft() {
    let ctx = TestContext::new();
    ctx.seed_draft(&TestContext::named_snapshot("Waffle Cafe"));

    let text = ctx.with_work_dir(provision::review).unwrap();
    assert!(text.starts_with("=== WAFFLE HARDWARE ORDER ==="));
    assert!(text.contains("CUSTOMER: Waffle Cafe"));
}

#[test]
#[serial]
fn review_without_a_draft_is_draft_not_found() {
    let ctx = TestContext::new();
    let result = ctx.with_work_dir(provision::review);
    assert!(matches!(result, Err(AppError::DraftNotFound)));
}

#[test]
#[serial]
fn mock_submit_returns_a_receipt() {
    let ctx = TestContext::new();
    ctx.seed_draft(&TestContext::named_snapshot("Waffle Cafe"));

    let receipt = ctx.with_work_dir(|| provision::submit(true)).unwrap();
    assert!(receipt.record_url.is_some());
}

#[test]
#[serial]
fn mock_submit_is_blocked_without_a_customer_name() {
    let ctx = TestContext::new();
    ctx.seed_draft(&TestContext::named_snapshot(""));

    let result = ctx.with_work_dir(|| provision::submit(true));
    assert!(matches!(result, Err(AppError::MissingCustomerName)));
}

#[test]
#[serial]
fn reset_reports_whether_a_draft_was_discarded() {
    let ctx = TestContext::new();
    assert!(!ctx.with_work_dir(provision::reset).unwrap());

    ctx.seed_draft(&TestContext::named_snapshot("Waffle Cafe"));
    assert!(ctx.with_work_dir(provision::reset).unwrap());
    assert!(!ctx.draft_path().exists());
}
