pub mod errors;
pub mod gateway;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

use std::sync::{Arc, Mutex, MutexGuard};

use errors::{CoreError, FailureKind};
use gateway::gemini::GeminiGateway;
use gateway::traits::Gateway;
use models::{
    analysis::AnalysisResult,
    company::Company,
    settings::Settings,
    watchlist::{ToggleAction, Watchlist},
};
use services::{
    adapter::{require_query, QueryAdapter},
    analysis_service::AnalysisService,
    calendar_service::CalendarService,
    company_service::CompanySearchService,
    macro_service::MacroSummaryService,
    news_service::NewsService,
};
use state::{
    loading::LoadingGuard,
    view_state::{Activity, NavigationTab, SessionState, ViewState},
};
use storage::{kv::KeyValueStore, watchlist_repo::WatchlistRepository};

/// How a dashboard request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Empty query; no gateway call was made and the state is unchanged.
    Skipped,
    /// The gateway answer was applied.
    Completed,
    /// The fallback value was applied; the kind says why.
    FellBack(FailureKind),
    /// A newer request of the same kind was issued meanwhile; this result was discarded.
    Superseded,
}

/// Main entry point for the Market Brief core library.
///
/// Owns the session's view state, the query adapters and the durable
/// watchlist store. All operations take `&self`: requests can be in flight
/// while tabs change or snapshots are read. The state lock is never held
/// across a gateway call.
#[must_use]
pub struct MarketDashboard {
    state: Mutex<SessionState>,
    store: Arc<dyn KeyValueStore>,
    macro_service: MacroSummaryService,
    analysis_service: AnalysisService,
    news_service: NewsService,
    calendar_service: CalendarService,
    company_service: CompanySearchService,
}

impl std::fmt::Debug for MarketDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("MarketDashboard")
            .field("active_tab", &state.view.active_tab)
            .field("news", &state.view.news.len())
            .field("calendar", &state.view.calendar.len())
            .field("watchlist", &state.view.watchlist.len())
            .field("activity", &state.view.activity)
            .finish()
    }
}

impl MarketDashboard {
    /// Create a dashboard backed by the HTTP gateway configured in `settings`.
    pub fn new(settings: &Settings, store: Arc<dyn KeyValueStore>) -> Self {
        let gateway: Arc<dyn Gateway> = Arc::new(GeminiGateway::new(settings));
        Self::with_gateway(gateway, settings, store)
    }

    /// Create a dashboard on top of any gateway implementation.
    /// Reads the persisted watchlist once.
    pub fn with_gateway(
        gateway: Arc<dyn Gateway>,
        settings: &Settings,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let watchlist = WatchlistRepository::load(store.as_ref());
        tracing::info!(
            gateway = gateway.name(),
            credential = settings.has_api_key(),
            watchlist = watchlist.len(),
            "market dashboard initialized"
        );

        Self {
            state: Mutex::new(SessionState::new(ViewState::new(watchlist))),
            store,
            macro_service: MacroSummaryService::new(gateway.clone(), &settings.flash_model),
            analysis_service: AnalysisService::new(gateway.clone(), &settings.analysis_model),
            news_service: NewsService::new(gateway.clone(), &settings.flash_model),
            calendar_service: CalendarService::new(gateway.clone(), &settings.flash_model),
            company_service: CompanySearchService::new(gateway, &settings.flash_model),
        }
    }

    /// Create a dashboard that keeps its watchlist in `dir` (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(
        settings: &Settings,
        dir: impl Into<std::path::PathBuf>,
    ) -> Result<Self, CoreError> {
        let store = storage::file_store::FileStore::open(dir)?;
        Ok(Self::new(settings, Arc::new(store)))
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// Copy of the current view state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    #[must_use]
    pub fn active_tab(&self) -> NavigationTab {
        self.lock().view.active_tab
    }

    #[must_use]
    pub fn watchlist(&self) -> Watchlist {
        self.lock().view.watchlist.clone()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<AnalysisResult> {
        self.lock().view.analysis.clone()
    }

    #[must_use]
    pub fn is_active(&self, activity: Activity) -> bool {
        self.lock().view.activity.is_active(activity)
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Switch tabs and close the mobile navigation overlay.
    pub fn set_active_tab(&self, tab: NavigationTab) {
        self.lock().view.set_active_tab(tab);
    }

    pub fn toggle_sidebar(&self) {
        self.lock().view.toggle_sidebar();
    }

    // ── Gateway-backed operations ───────────────────────────────────

    /// Ask the analyst a free-text question.
    ///
    /// Empty queries are ignored. Otherwise the answer (or the failure
    /// placeholder) replaces the previous analysis and the analyst tab opens.
    pub async fn run_analysis(&self, query: &str) -> RequestOutcome {
        let Ok(query) = require_query(query) else {
            return RequestOutcome::Skipped;
        };
        self.lock().view.last_query = Some(query.to_string());

        self.run_slice(Activity::Analyzing, &self.analysis_service, query, |view, body| {
            view.analysis = Some(AnalysisResult::new(query, body));
            view.set_active_tab(NavigationTab::Analyst);
        })
        .await
    }

    /// Search companies related to `query` and replace the result list.
    pub async fn search_companies(&self, query: &str) -> RequestOutcome {
        let Ok(query) = require_query(query) else {
            return RequestOutcome::Skipped;
        };
        self.lock().view.search_query = Some(query.to_string());

        self.run_slice(Activity::Searching, &self.company_service, query, |view, results| {
            view.search_results = results;
        })
        .await
    }

    /// Startup fetch: macro summary, news and calendar, driven concurrently.
    /// Each one updates only its own slice and flag, so one slow or failing
    /// call never holds back the others.
    pub async fn load_initial_data(&self) -> [RequestOutcome; 3] {
        let (macro_summary, news, calendar) = tokio::join!(
            self.refresh_macro_summary(),
            self.refresh_news(),
            self.refresh_calendar(),
        );
        [macro_summary, news, calendar]
    }

    pub async fn refresh_macro_summary(&self) -> RequestOutcome {
        self.run_slice(Activity::LoadingMacro, &self.macro_service, &(), |view, summary| {
            view.macro_summary = summary;
        })
        .await
    }

    pub async fn refresh_news(&self) -> RequestOutcome {
        self.run_slice(Activity::LoadingNews, &self.news_service, &(), |view, news| {
            view.news = news;
        })
        .await
    }

    pub async fn refresh_calendar(&self) -> RequestOutcome {
        self.run_slice(Activity::LoadingCalendar, &self.calendar_service, &(), |view, events| {
            view.calendar = events;
        })
        .await
    }

    /// Issue one adapter call for `activity` and write its value (or
    /// fallback) into the view, unless a newer call for the same activity
    /// started in the meantime.
    async fn run_slice<A, F>(
        &self,
        activity: Activity,
        adapter: &A,
        input: &A::Input,
        apply: F,
    ) -> RequestOutcome
    where
        A: QueryAdapter,
        F: FnOnce(&mut ViewState, A::Output),
    {
        let generation = self.lock().next_generation(activity);
        let _loading = LoadingGuard::acquire(&self.state, activity);

        let (value, outcome) = match adapter.execute(input).await {
            Ok(value) => (value, RequestOutcome::Completed),
            Err(fallback) => {
                let kind = fallback.kind();
                (fallback.into_value(), RequestOutcome::FellBack(kind))
            }
        };

        let mut state = self.lock();
        if !state.is_current(activity, generation) {
            tracing::debug!(%activity, generation, "discarding superseded result");
            return RequestOutcome::Superseded;
        }
        apply(&mut state.view, value);
        outcome
    }

    // ── Watchlist ───────────────────────────────────────────────────

    /// Add the company if its ticker is not watched yet, otherwise remove it.
    ///
    /// The whole list is written to the durable store before the in-memory
    /// copy changes. If the write fails, both stay as they were.
    pub fn toggle_watchlist(&self, company: Company) -> Result<ToggleAction, CoreError> {
        let mut state = self.lock();
        let mut next = state.view.watchlist.clone();
        let ticker = company.ticker.clone();
        let action = next.toggle(company);

        WatchlistRepository::save(self.store.as_ref(), &next)?;
        state.view.watchlist = next;

        tracing::info!(%ticker, ?action, size = state.view.watchlist.len(), "watchlist updated");
        Ok(action)
    }
}
