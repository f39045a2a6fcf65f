//! HTTP calls made by the page: contact form delivery and asset probes.
//!
//! Browser builds use `gloo-net`. Native builds stub both calls so the rest
//! of the crate compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Neither call retries. A failed submission surfaces as [`SubmitError`] and
//! the visitor resubmits by hand; a failed probe becomes
//! [`ProbeOutcome::Failed`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use effects::download::ProbeOutcome;

use crate::error::SubmitError;

/// POST the form's fields to `endpoint`, expecting a 2xx answer.
///
/// # Errors
///
/// Returns [`SubmitError`] on network failure or a non-2xx status.
#[cfg(feature = "csr")]
pub async fn submit_form(endpoint: &str, form: &web_sys::HtmlFormElement) -> Result<(), SubmitError> {
    let data = web_sys::FormData::new_with_form(form).map_err(|e| SubmitError::Dom(crate::util::dom::describe(&e)))?;
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Accept", "application/json")
        .body(data)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(());
    }
    let detail = resp
        .text()
        .await
        .ok()
        .and_then(|body| effects::form::endpoint_error_message(&body));
    Err(SubmitError::Status { status: resp.status(), detail })
}

/// Stand-in for a real endpoint: wait, then succeed.
pub async fn simulate_submission(delay_ms: u32) -> Result<(), SubmitError> {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay_ms;
        Ok(())
    }
}

/// `HEAD` the asset at `url` to find out whether it exists.
pub async fn probe_asset(url: &str) -> ProbeOutcome {
    #[cfg(feature = "csr")]
    {
        let status = gloo_net::http::RequestBuilder::new(url)
            .method(gloo_net::http::Method::HEAD)
            .send()
            .await
            .map(|resp| resp.status());
        match status {
            Ok(code) => ProbeOutcome::from_status(Some(code)),
            Err(e) => {
                log::warn!("asset probe failed for {url}: {e}");
                ProbeOutcome::from_status(None)
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        ProbeOutcome::from_status(None)
    }
}
