// ═══════════════════════════════════════════════════════════════════
// Model Tests: indicators, news images, calendar enums, watchlist,
// settings, view state
// ═══════════════════════════════════════════════════════════════════

use market_brief_core::models::calendar::{CalendarEvent, EventCategory, ImpactLevel};
use market_brief_core::models::company::Company;
use market_brief_core::models::indicator::{MarketIndicator, Trend};
use market_brief_core::models::news::{image_for_position, IMAGE_POOL_SIZE};
use market_brief_core::models::settings::{Settings, DEFAULT_ANALYSIS_MODEL, DEFAULT_FLASH_MODEL};
use market_brief_core::models::watchlist::{ToggleAction, Watchlist};
use market_brief_core::state::view_state::{Activity, NavigationTab, ViewState};

fn company(ticker: &str) -> Company {
    Company::new(ticker, ticker, "Tech", "$1", "d")
}

// ═══════════════════════════════════════════════════════════════════
// MarketIndicator
// ═══════════════════════════════════════════════════════════════════

mod indicator {
    use super::*;

    #[test]
    fn trend_follows_sign_of_change() {
        assert_eq!(MarketIndicator::new("S&P 500", "5,342.12", 1.25).trend(), Trend::Up);
        assert_eq!(MarketIndicator::new("원/달러 환율", "1,372.50", -0.15).trend(), Trend::Down);
        assert_eq!(MarketIndicator::new("금", "$2,345.20", 0.0).trend(), Trend::Neutral);
    }

    #[test]
    fn deserialized_trend_follows_change() {
        let ind: MarketIndicator = serde_json::from_str(
            r#"{"name": "S&P 500", "value": "5,000", "change": -1.5, "trend": "up"}"#,
        )
        .unwrap();
        assert_eq!(ind.change(), -1.5);
        assert_eq!(ind.trend(), Trend::Down);

        let ind: MarketIndicator =
            serde_json::from_str(r#"{"name": "VIX", "value": "14.2", "change": 0.0}"#).unwrap();
        assert_eq!(ind.trend(), Trend::Neutral);
    }

    #[test]
    fn set_change_updates_trend() {
        let mut ind = MarketIndicator::new("x", "1", 2.0);
        ind.set_change(-3.0);
        assert_eq!(ind.change(), -3.0);
        assert_eq!(ind.trend(), Trend::from_change(-3.0));
    }

    #[test]
    fn trend_serializes_lowercase() {
        let json = serde_json::to_string(&MarketIndicator::new("WTI", "$78.45", 0.85)).unwrap();
        assert!(json.contains("\"trend\":\"up\""));
    }
}

// ═══════════════════════════════════════════════════════════════════
// News image references
// ═══════════════════════════════════════════════════════════════════

mod news_images {
    use super::*;

    #[test]
    fn stable_for_same_position() {
        for position in 0..30 {
            assert_eq!(image_for_position(position), image_for_position(position));
        }
    }

    #[test]
    fn wraps_around_pool() {
        assert_eq!(IMAGE_POOL_SIZE, 12);
        assert_eq!(image_for_position(0), image_for_position(IMAGE_POOL_SIZE));
        assert_eq!(image_for_position(5), image_for_position(5 + 3 * IMAGE_POOL_SIZE));
        assert_ne!(image_for_position(0), image_for_position(1));
    }

    #[test]
    fn is_a_sized_image_url() {
        let url = image_for_position(3);
        assert!(url.starts_with("https://images.unsplash.com/photo-"));
        assert!(url.ends_with("?q=80&w=600&auto=format&fit=crop"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// CalendarEvent
// ═══════════════════════════════════════════════════════════════════

mod calendar_event {
    use super::*;

    #[test]
    fn type_field_maps_to_category() {
        let event: CalendarEvent = serde_json::from_str(
            r#"{"id": "1", "date": "2026-10-29", "title": "FOMC", "type": "fed", "impact": "high"}"#,
        )
        .unwrap();
        assert_eq!(event.category, EventCategory::Fed);
        assert_eq!(event.impact, ImpactLevel::High);

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["type"], "fed");
    }

    #[test]
    fn unknown_impact_is_rejected() {
        let result = serde_json::from_str::<CalendarEvent>(
            r#"{"id": "1", "date": "d", "title": "t", "type": "macro", "impact": "extreme"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn enum_strings() {
        let categories: Vec<&str> = EventCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(categories, vec!["earnings", "macro", "fed"]);
        assert_eq!(ImpactLevel::Medium.to_string(), "medium");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Watchlist
// ═══════════════════════════════════════════════════════════════════

mod watchlist {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = Watchlist::new();
        assert_eq!(list.toggle(company("NVDA")), ToggleAction::Added);
        assert!(list.contains("NVDA"));
        assert_eq!(list.toggle(company("NVDA")), ToggleAction::Removed);
        assert!(list.is_empty());
    }

    #[test]
    fn ticker_match_ignores_case_and_whitespace() {
        let mut list = Watchlist::new();
        list.toggle(company("AAPL"));
        assert!(list.contains(" aapl "));
        assert_eq!(list.toggle(company("aapl")), ToggleAction::Removed);
    }

    #[test]
    fn removal_keeps_order_of_the_rest() {
        let mut list = Watchlist::new();
        for t in ["A", "B", "C"] {
            list.toggle(company(t));
        }
        list.toggle(company("B"));
        let tickers: Vec<&str> = list.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "C"]);
    }

    #[test]
    fn get_finds_by_ticker() {
        let list = Watchlist::from_companies(vec![company("NVDA"), company("AAPL")]);
        assert_eq!(list.get("aapl").map(|c| c.ticker.as_str()), Some("AAPL"));
        assert!(list.get("TSLA").is_none());
    }

    #[test]
    fn from_companies_drops_duplicates() {
        let list = Watchlist::from_companies(vec![company("A"), company("a"), company("B")]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn toggle_pair_is_an_involution() {
        let mut list = Watchlist::from_companies(vec![company("X"), company("Y")]);
        let before = list.clone();
        for t in ["X", "Z", "Y"] {
            list.toggle(company(t));
            list.toggle(company(t));
            // Removing and re-adding moves an existing ticker to the end.
            assert_eq!(list.len(), before.len());
            assert!(before.iter().all(|c| list.contains(&c.ticker)));
        }
        let mut fresh = Watchlist::new();
        fresh.toggle(company("Q"));
        fresh.toggle(company("Q"));
        assert_eq!(fresh, Watchlist::new());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let s = Settings::from_lookup(lookup(&[]));
        assert_eq!(s, Settings::default());
        assert!(!s.has_api_key());
        assert_eq!(s.analysis_model, DEFAULT_ANALYSIS_MODEL);
        assert_eq!(s.flash_model, DEFAULT_FLASH_MODEL);
    }

    #[test]
    fn api_key_prefers_primary_variable() {
        let s = Settings::from_lookup(lookup(&[("API_KEY", "k1"), ("GEMINI_API_KEY", "k2")]));
        assert_eq!(s.api_key.as_deref(), Some("k1"));

        let s = Settings::from_lookup(lookup(&[("API_KEY", "  "), ("GEMINI_API_KEY", "k2")]));
        assert_eq!(s.api_key.as_deref(), Some("k2"));
    }

    #[test]
    fn overrides_models_and_base_url() {
        let s = Settings::from_lookup(lookup(&[
            ("MARKET_BRIEF_BASE_URL", "http://localhost:8080/v1/"),
            ("MARKET_BRIEF_ANALYSIS_MODEL", "pro-x"),
            ("MARKET_BRIEF_FLASH_MODEL", "flash-x"),
        ]));
        assert_eq!(s.base_url, "http://localhost:8080/v1");
        assert_eq!(s.analysis_model, "pro-x");
        assert_eq!(s.flash_model, "flash-x");
    }

    #[test]
    fn with_api_key_sets_credential() {
        assert!(Settings::default().with_api_key("secret").has_api_key());
        assert!(!Settings::default().with_api_key(" ").has_api_key());
    }
}

// ═══════════════════════════════════════════════════════════════════
// ViewState transitions
// ═══════════════════════════════════════════════════════════════════

mod view_state {
    use super::*;

    #[test]
    fn tab_switch_closes_sidebar() {
        let mut view = ViewState::default();
        view.toggle_sidebar();
        assert!(view.sidebar_open);
        view.set_active_tab(NavigationTab::Watchlist);
        assert_eq!(view.active_tab, NavigationTab::Watchlist);
        assert!(!view.sidebar_open);
    }

    #[test]
    fn starts_idle_with_given_watchlist() {
        let view = ViewState::new(Watchlist::from_companies(vec![company("NVDA")]));
        assert!(view.activity.is_idle());
        assert!(Activity::ALL.iter().all(|a| !view.activity.is_active(*a)));
        assert!(view.is_watched("nvda"));
        assert!(!view.is_analyzing() && !view.is_searching());
    }

    #[test]
    fn tab_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&NavigationTab::Analyst).unwrap(), "\"analyst\"");
    }
}
