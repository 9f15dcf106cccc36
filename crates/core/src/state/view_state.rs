use serde::{Deserialize, Serialize};

use crate::models::analysis::AnalysisResult;
use crate::models::calendar::CalendarEvent;
use crate::models::company::Company;
use crate::models::news::NewsItem;
use crate::models::watchlist::Watchlist;
use crate::services::prompts;

/// The dashboard's top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    #[default]
    Dashboard,
    Analyst,
    News,
    Calendar,
    Watchlist,
}

/// An asynchronous operation that owns one slice of the view state and one
/// loading flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Analyzing,
    Searching,
    LoadingMacro,
    LoadingNews,
    LoadingCalendar,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Analyzing,
        Activity::Searching,
        Activity::LoadingMacro,
        Activity::LoadingNews,
        Activity::LoadingCalendar,
    ];

    fn index(self) -> usize {
        match self {
            Activity::Analyzing => 0,
            Activity::Searching => 1,
            Activity::LoadingMacro => 2,
            Activity::LoadingNews => 3,
            Activity::LoadingCalendar => 4,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Analyzing => write!(f, "analyzing"),
            Activity::Searching => write!(f, "searching"),
            Activity::LoadingMacro => write!(f, "loading_macro"),
            Activity::LoadingNews => write!(f, "loading_news"),
            Activity::LoadingCalendar => write!(f, "loading_calendar"),
        }
    }
}

/// Loading flags, one per [`Activity`].
///
/// Each flag counts requests in flight, so overlapping calls keep the flag
/// raised until the last one completes. A flag reads as set while its count
/// is non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFlags {
    in_flight: [u32; 5],
}

impl ActivityFlags {
    #[must_use]
    pub fn is_active(&self, activity: Activity) -> bool {
        self.in_flight[activity.index()] > 0
    }

    /// Whether every flag is idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.in_flight.iter().all(|n| *n == 0)
    }

    pub(crate) fn begin(&mut self, activity: Activity) {
        self.in_flight[activity.index()] += 1;
    }

    pub(crate) fn end(&mut self, activity: Activity) {
        let slot = &mut self.in_flight[activity.index()];
        *slot = slot.saturating_sub(1);
    }
}

/// Everything the presentation layer renders. Handed out as a snapshot by
/// `MarketDashboard::snapshot`; only the dashboard mutates the live copy.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_tab: NavigationTab,
    /// Mobile navigation overlay.
    pub sidebar_open: bool,
    pub macro_summary: String,
    /// Last submitted analysis question.
    pub last_query: Option<String>,
    pub analysis: Option<AnalysisResult>,
    pub news: Vec<NewsItem>,
    pub calendar: Vec<CalendarEvent>,
    /// Last submitted company search.
    pub search_query: Option<String>,
    pub search_results: Vec<Company>,
    pub watchlist: Watchlist,
    pub activity: ActivityFlags,
}

impl ViewState {
    pub fn new(watchlist: Watchlist) -> Self {
        Self {
            active_tab: NavigationTab::default(),
            sidebar_open: false,
            macro_summary: prompts::MACRO_LOADING.to_string(),
            last_query: None,
            analysis: None,
            news: Vec::new(),
            calendar: Vec::new(),
            search_query: None,
            search_results: Vec::new(),
            watchlist,
            activity: ActivityFlags::default(),
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.activity.is_active(Activity::Analyzing)
    }

    pub fn is_searching(&self) -> bool {
        self.activity.is_active(Activity::Searching)
    }

    pub fn is_loading_macro(&self) -> bool {
        self.activity.is_active(Activity::LoadingMacro)
    }

    pub fn is_loading_news(&self) -> bool {
        self.activity.is_active(Activity::LoadingNews)
    }

    pub fn is_loading_calendar(&self) -> bool {
        self.activity.is_active(Activity::LoadingCalendar)
    }

    /// Whether `ticker` is in the watchlist (for the star toggle on search results).
    pub fn is_watched(&self, ticker: &str) -> bool {
        self.watchlist.contains(ticker)
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Switch tabs. Also closes the mobile navigation overlay.
    pub fn set_active_tab(&mut self, tab: NavigationTab) {
        self.active_tab = tab;
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Watchlist::new())
    }
}

/// Live session state behind the dashboard's lock: the view plus one
/// request-generation counter per activity.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) view: ViewState,
    generations: [u64; 5],
}

impl SessionState {
    pub(crate) fn new(view: ViewState) -> Self {
        Self {
            view,
            generations: [0; 5],
        }
    }

    /// Start a new request for `activity`; earlier ones become stale.
    pub(crate) fn next_generation(&mut self, activity: Activity) -> u64 {
        let slot = &mut self.generations[activity.index()];
        *slot += 1;
        *slot
    }

    pub(crate) fn is_current(&self, activity: Activity, generation: u64) -> bool {
        self.generations[activity.index()] == generation
    }
}
