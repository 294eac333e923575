//! Crude polling substitute for live updates on the staff dashboards.

use gloo_timers::callback::Interval;

use super::dom;

const REFRESH_PERIOD_MS: u32 = 30_000;

/// Admin and delivery pages reload unconditionally every 30 seconds. The
/// interval is leaked: it runs for the rest of the page's life.
pub(super) fn start_auto_refresh() {
    let Some(window) = dom::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if !(path.contains("/admin/") || path.contains("/delivery/")) {
        return;
    }

    Interval::new(REFRESH_PERIOD_MS, || {
        if let Some(w) = dom::window() {
            let _ = w.location().reload();
        }
    })
    .forget();
}
