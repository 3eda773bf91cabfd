use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::UseReducerDispatcher;

use super::client::{CounterClient, CounterService};
use super::cooldown::{check_in, LocalStorageMarker, MarkerStore, VisitDecision};
use super::stats::{CounterAction, CounterState};
use crate::config::NOTICE_DURATION_MS;

pub const DOWNLOAD_THANKS: &str = "ALA를 다운로드해 주셔서 감사합니다!";

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// One `/check` round trip. Failures are logged and still produce the
/// terminal `StatsFetched` so the loading count settles.
pub async fn refresh_stats(service: &impl CounterService, dispatch: &impl Fn(CounterAction)) {
    dispatch(CounterAction::FetchStarted);
    let result = service.fetch_stats().await;
    if let Err(e) = &result {
        log::error!("Failed to fetch stats: {}", e);
    }
    dispatch(CounterAction::StatsFetched(result));
}

/// Page-load flow: decide, register if due, then refresh the totals.
pub async fn visit_flow(
    store: &impl MarkerStore,
    service: &impl CounterService,
    now_ms: i64,
    dispatch: impl Fn(CounterAction),
) -> VisitDecision {
    let decision = check_in(store, now_ms);

    match decision {
        VisitDecision::Register { marker } => {
            log::info!("Registering visit at {}", marker);
            if let Err(e) = service.register_visit().await {
                log::error!("Failed to register visit: {}", e);
            }
        }
        VisitDecision::Suppress { age_ms } => {
            log::info!("Visit already counted {} minutes ago", age_ms / 60_000);
            // stats load while the notice is up, not after it hides
            dispatch(CounterAction::ShowNotice);
        }
    }

    refresh_stats(service, &dispatch).await;
    decision
}

/// CTA flow. `confirm` runs whether or not the service recorded the
/// download.
pub async fn download_flow(
    service: &impl CounterService,
    dispatch: impl Fn(CounterAction),
    confirm: impl FnOnce(),
) {
    if let Err(e) = service.register_download().await {
        log::error!("Failed to register download: {}", e);
    }
    refresh_stats(service, &dispatch).await;
    confirm();
}

/// Runs once per page mount.
pub fn start_visit(client: CounterClient, dispatcher: UseReducerDispatcher<CounterState>) {
    let dispatch = move |action: CounterAction| {
        if matches!(action, CounterAction::ShowNotice) {
            let hide = dispatcher.clone();
            Timeout::new(NOTICE_DURATION_MS, move || {
                hide.dispatch(CounterAction::HideNotice);
            })
            .forget();
        }
        dispatcher.dispatch(action);
    };

    spawn_local(async move {
        visit_flow(&LocalStorageMarker, &client, now_ms(), dispatch).await;
    });
}

pub fn start_download(client: CounterClient, dispatcher: UseReducerDispatcher<CounterState>) {
    spawn_local(async move {
        download_flow(
            &client,
            move |action| dispatcher.dispatch(action),
            || {
                if let Some(window) = window() {
                    let _ = window.alert_with_message(DOWNLOAD_THANKS);
                }
            },
        )
        .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::client::CounterError;
    use crate::counter::stats::TrafficStats;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Reducible;

    const NOW: i64 = 1_700_000_000_000;
    const HOUR_MS: i64 = 60 * 60 * 1000;

    #[derive(Default)]
    struct MemoryMarker {
        value: RefCell<Option<String>>,
    }

    impl MarkerStore for MemoryMarker {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }
    }

    /// Records every call in order; `/download` can be told to fail.
    struct FakeService {
        calls: RefCell<Vec<&'static str>>,
        rows: Vec<TrafficStats>,
        download_fails: bool,
    }

    impl FakeService {
        fn new(rows: Vec<TrafficStats>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                rows,
                download_fails: false,
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl CounterService for FakeService {
        async fn register_visit(&self) -> Result<(), CounterError> {
            self.calls.borrow_mut().push("/");
            Ok(())
        }

        async fn fetch_stats(&self) -> Result<Vec<TrafficStats>, CounterError> {
            self.calls.borrow_mut().push("/check");
            Ok(self.rows.clone())
        }

        async fn register_download(&self) -> Result<(), CounterError> {
            self.calls.borrow_mut().push("/download");
            if self.download_fails {
                return Err(CounterError::Status {
                    endpoint: "/download",
                    status: 500,
                });
            }
            Ok(())
        }
    }

    /// Feeds dispatched actions through the reducer, like `use_reducer` does.
    struct Page {
        state: RefCell<Rc<CounterState>>,
    }

    impl Page {
        fn new() -> Self {
            Self {
                state: RefCell::new(Rc::new(CounterState::default())),
            }
        }

        fn dispatch(&self) -> impl Fn(CounterAction) + '_ {
            move |action| {
                let next = self.state.borrow().clone().reduce(action);
                *self.state.borrow_mut() = next;
            }
        }

        fn state(&self) -> Rc<CounterState> {
            self.state.borrow().clone()
        }
    }

    fn stats(visit_count: u64, download_count: u64) -> TrafficStats {
        TrafficStats {
            visit_count,
            download_count,
        }
    }

    #[test]
    fn first_load_registers_then_fetches() {
        let store = MemoryMarker::default();
        let service = FakeService::new(vec![stats(42, 7)]);
        let page = Page::new();

        let decision = block_on(visit_flow(&store, &service, NOW, page.dispatch()));

        assert!(decision.registers());
        assert_eq!(service.calls(), vec!["/", "/check"]);
        let state = page.state();
        assert!(!state.notice_visible);
        assert_eq!(state.visit_label(), "42");
        assert_eq!(state.download_label(), "7");
        assert_eq!(store.load(), Some(NOW.to_string()));
    }

    #[test]
    fn recent_load_shows_notice_and_still_fetches() {
        let store = MemoryMarker::default();
        store.save(&(NOW - HOUR_MS).to_string());
        let service = FakeService::new(vec![stats(42, 7)]);
        let page = Page::new();

        let decision = block_on(visit_flow(&store, &service, NOW, page.dispatch()));

        assert!(decision.shows_notice());
        assert_eq!(service.calls(), vec!["/check"]);
        let state = page.state();
        assert!(state.notice_visible);
        assert_eq!(state.stats, stats(42, 7));
        assert!(!state.loading());
    }

    #[test]
    fn stale_load_registers_without_notice() {
        let store = MemoryMarker::default();
        store.save(&(NOW - 25 * HOUR_MS).to_string());
        let service = FakeService::new(vec![]);
        let page = Page::new();

        block_on(visit_flow(&store, &service, NOW, page.dispatch()));

        assert_eq!(service.calls(), vec!["/", "/check"]);
        assert!(!page.state().notice_visible);
        assert_eq!(page.state().stats, TrafficStats::default());
        assert_eq!(store.load(), Some(NOW.to_string()));
    }

    #[test]
    fn repeated_loads_register_once_per_window() {
        let store = MemoryMarker::default();
        let service = FakeService::new(vec![stats(1, 0)]);

        for i in 0..4 {
            let page = Page::new();
            block_on(visit_flow(&store, &service, NOW + i * HOUR_MS, page.dispatch()));
            assert_eq!(page.state().notice_visible, i > 0);
        }

        let registrations = service.calls().iter().filter(|c| **c == "/").count();
        assert_eq!(registrations, 1);
    }

    #[test]
    fn download_refetches_and_confirms() {
        let service = FakeService::new(vec![stats(42, 8)]);
        let page = Page::new();
        let confirmed = Cell::new(false);

        block_on(download_flow(&service, page.dispatch(), || confirmed.set(true)));

        assert_eq!(service.calls(), vec!["/download", "/check"]);
        assert_eq!(page.state().download_label(), "8");
        assert!(confirmed.get());
    }

    #[test]
    fn failed_download_still_confirms() {
        let mut service = FakeService::new(vec![stats(42, 7)]);
        service.download_fails = true;
        let page = Page::new();
        let confirmed = Cell::new(false);

        block_on(download_flow(&service, page.dispatch(), || confirmed.set(true)));

        assert_eq!(service.calls(), vec!["/download", "/check"]);
        assert_eq!(page.state().stats, stats(42, 7));
        assert!(confirmed.get());
    }
}
