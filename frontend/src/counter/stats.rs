use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use super::client::CounterError;

pub const LOADING_LABEL: &str = "로딩 중...";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrafficStats {
    pub visit_count: u64,
    pub download_count: u64,
}

/// Counter state owned by the landing page. Every change goes through
/// [`CounterAction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub stats: TrafficStats,
    pub pending_fetches: u32,
    pub notice_visible: bool,
}

pub enum CounterAction {
    FetchStarted,
    /// The single terminal update of one `/check` request.
    StatsFetched(Result<Vec<TrafficStats>, CounterError>),
    ShowNotice,
    HideNotice,
}

impl CounterState {
    pub fn loading(&self) -> bool {
        self.pending_fetches > 0
    }

    pub fn visit_label(&self) -> String {
        count_label(self.loading(), self.stats.visit_count)
    }

    pub fn download_label(&self) -> String {
        count_label(self.loading(), self.stats.download_count)
    }
}

pub fn count_label(loading: bool, value: u64) -> String {
    if loading {
        LOADING_LABEL.to_string()
    } else {
        value.to_string()
    }
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CounterAction::FetchStarted => {
                next.pending_fetches += 1;
            }
            CounterAction::StatsFetched(result) => {
                next.pending_fetches = next.pending_fetches.saturating_sub(1);
                match result {
                    Ok(rows) => match rows.into_iter().next() {
                        Some(stats) => next.stats = stats,
                        None => log::debug!("Counter service returned no rows"),
                    },
                    Err(e) => log::debug!("Keeping previous stats: {}", e),
                }
            }
            CounterAction::ShowNotice => next.notice_visible = true,
            CounterAction::HideNotice => next.notice_visible = false,
        }
        Rc::new(next)
    }
}
