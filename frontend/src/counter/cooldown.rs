use web_sys::window;

use crate::config::{LAST_VISIT_KEY, VISIT_COOLDOWN_MS};

/// Where the last-visit timestamp lives between page loads.
pub trait MarkerStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// The browser's localStorage. Missing or blocked storage reads as "no marker"
/// and silently drops writes.
pub struct LocalStorageMarker;

impl MarkerStore for LocalStorageMarker {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(LAST_VISIT_KEY).ok())
            .flatten()
    }

    fn save(&self, value: &str) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(LAST_VISIT_KEY, value).is_err() {
                    log::warn!("Could not persist last visit marker");
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitDecision {
    /// Count this page load as a visit; `marker` is the timestamp now stored.
    Register { marker: i64 },
    /// Already counted inside the cooldown window.
    Suppress { age_ms: i64 },
}

impl VisitDecision {
    pub fn registers(&self) -> bool {
        matches!(self, VisitDecision::Register { .. })
    }

    pub fn shows_notice(&self) -> bool {
        matches!(self, VisitDecision::Suppress { .. })
    }
}

pub fn parse_marker(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}

pub fn decide_visit(marker: Option<i64>, now_ms: i64) -> VisitDecision {
    // a marker too far off to subtract is as good as none
    match marker.and_then(|last| now_ms.checked_sub(last)) {
        // a marker from the future has negative age and stays suppressed
        Some(age_ms) if age_ms < VISIT_COOLDOWN_MS => VisitDecision::Suppress { age_ms },
        _ => VisitDecision::Register { marker: now_ms },
    }
}

/// Reads the marker, decides, and stamps the store before any request goes
/// out. A registration that later fails still holds the window.
pub fn check_in(store: &impl MarkerStore, now_ms: i64) -> VisitDecision {
    let stored = store.load();
    let decision = decide_visit(parse_marker(stored.as_deref()), now_ms);
    if let VisitDecision::Register { marker } = decision {
        store.save(&marker.to_string());
    }
    decision
}
