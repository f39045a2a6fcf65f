#![cfg(not(feature = "csr"))]

use futures::executor::block_on;

use super::*;

#[test]
fn simulated_submission_succeeds() {
    assert_eq!(block_on(simulate_submission(2_000)), Ok(()));
}

#[test]
fn probe_without_browser_reports_failure() {
    assert_eq!(block_on(probe_asset("/cv.pdf")), ProbeOutcome::Failed);
}
