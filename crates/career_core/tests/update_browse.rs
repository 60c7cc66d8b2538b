mod support;

use career_core::{
    update, BrowseState, Difficulty, Effect, FilterOptions, Msg, Notice, Screen, ScreenView,
    SortOption, SELECTION_LIMIT,
};
use pretty_assertions::assert_eq;
use support::sample_catalog;

fn submit_query(state: BrowseState, input: &str) -> (BrowseState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(input.to_string()));
    update(state, Msg::SearchSubmitted)
}

fn row_ids(view: &ScreenView) -> Vec<String> {
    match view {
        ScreenView::SearchResults { jobs, .. } | ScreenView::FilterResults { jobs } => {
            jobs.iter().map(|row| row.job_id.clone()).collect()
        }
        ScreenView::Sector(Some(page)) => page.jobs.iter().map(|row| row.job_id.clone()).collect(),
        other => panic!("unexpected screen {other:?}"),
    }
}

#[test]
fn update_is_noop() {
    let state = BrowseState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn home_lists_sectors_in_selected_order() {
    let catalog = sample_catalog();
    let state = BrowseState::new();

    let ScreenView::Home { sectors, .. } = state.view(&catalog).screen else {
        panic!("expected home");
    };
    let names: Vec<_> = sectors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Healthcare", "Technology"]);
    assert_eq!(sectors[1].job_count, 3);

    let (mut state, effects) = update(state, Msg::SortSelected(SortOption::AlphabeticalDesc));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let ScreenView::Home { sectors, .. } = state.view(&catalog).screen else {
        panic!("expected home");
    };
    assert_eq!(sectors[0].name, "Technology");
}

#[test]
fn submitting_search_records_history_and_clears_box() {
    let catalog = sample_catalog();
    let (mut state, effects) = submit_query(BrowseState::new(), "Engineer");

    assert_eq!(
        effects,
        vec![Effect::RecordSearch {
            query: "Engineer".to_string()
        }]
    );
    assert_eq!(
        state.screen(),
        &Screen::SearchResults {
            query: "Engineer".to_string()
        }
    );
    assert_eq!(state.query(), "");
    assert!(state.consume_dirty());
    assert_eq!(row_ids(&state.view(&catalog).screen), vec!["cloud-eng"]);
}

#[test]
fn blank_search_is_ignored() {
    let (mut state, effects) = submit_query(BrowseState::new(), "   ");
    assert!(effects.is_empty());
    assert_eq!(state.screen(), &Screen::Home);
    // Only the query edit itself changed anything.
    assert!(state.consume_dirty());
    let (mut state, effects) = update(state, Msg::SearchSubmitted);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn history_entry_runs_search_directly() {
    let (state, _) = update(BrowseState::new(), Msg::QueryChanged("dat".to_string()));
    let (state, effects) = update(state, Msg::HistoryEntrySelected("nurse".to_string()));
    assert_eq!(
        effects,
        vec![Effect::RecordSearch {
            query: "nurse".to_string()
        }]
    );
    assert_eq!(state.query(), "");
}

#[test]
fn suggestions_follow_query() {
    let catalog = sample_catalog();
    let (state, _) = update(BrowseState::new(), Msg::QueryChanged("data".to_string()));
    let view = state.view(&catalog);
    let ids: Vec<_> = view.suggestions.iter().map(|r| r.job_id.as_str()).collect();
    assert_eq!(ids, vec!["data-sci"]);

    let (state, _) = update(state, Msg::QueryChanged(String::new()));
    assert!(state.view(&catalog).suggestions.is_empty());
}

#[test]
fn applied_filters_navigate_to_results() {
    let catalog = sample_catalog();
    let mut filters = FilterOptions::default();
    filters.toggle_difficulty(Difficulty::Beginner);

    let (state, effects) = update(BrowseState::new(), Msg::FiltersApplied(filters.clone()));
    assert!(effects.is_empty());
    assert_eq!(state.screen(), &Screen::FilterResults);
    assert_eq!(state.filters(), &filters);
    assert_eq!(row_ids(&state.view(&catalog).screen), vec!["nurse"]);

    let (state, _) = update(state, Msg::FiltersReset);
    assert_eq!(state.filters(), &FilterOptions::default());
}

#[test]
fn sector_page_has_its_own_sort_reset_on_open() {
    let catalog = sample_catalog();
    let (state, _) = update(BrowseState::new(), Msg::SortSelected(SortOption::AlphabeticalDesc));
    let (state, _) = update(state, Msg::SectorOpened("tech".to_string()));
    assert_eq!(state.active_sort(), SortOption::AlphabeticalAsc);
    assert_eq!(
        row_ids(&state.view(&catalog).screen),
        vec!["cloud-eng", "data-sci", "web-dev"]
    );

    let (state, _) = update(state, Msg::SortSelected(SortOption::MostViewed));
    assert_eq!(
        row_ids(&state.view(&catalog).screen),
        vec!["web-dev", "data-sci", "cloud-eng"]
    );

    let (state, _) = update(state, Msg::HomeRequested);
    assert_eq!(state.active_sort(), SortOption::AlphabeticalDesc);
}

#[test]
fn unknown_entities_render_as_not_found() {
    let catalog = sample_catalog();
    let (state, _) = update(BrowseState::new(), Msg::SectorOpened("nope".to_string()));
    assert_eq!(state.view(&catalog).screen, ScreenView::Sector(None));

    let (state, effects) = update(state, Msg::JobOpened("nope".to_string()));
    assert_eq!(state.view(&catalog).screen, ScreenView::Job(None));
    assert_eq!(
        effects,
        vec![Effect::RecordView {
            job_id: "nope".to_string()
        }]
    );
}

#[test]
fn job_detail_resolves_sector_and_salary() {
    let catalog = sample_catalog();
    let (state, _) = update(BrowseState::new(), Msg::JobOpened("nurse".to_string()));
    let ScreenView::Job(Some(detail)) = state.view(&catalog).screen else {
        panic!("expected job detail");
    };
    assert_eq!(detail.sector_name, "Healthcare");
    assert_eq!(detail.salary, "₹41L - ₹74L");
}

#[test]
fn toggles_become_effects_and_rejection_sets_notice() {
    let (state, effects) = update(BrowseState::new(), Msg::FavoriteToggled("nurse".to_string()));
    assert_eq!(
        effects,
        vec![Effect::ToggleFavorite {
            job_id: "nurse".to_string()
        }]
    );

    let (state, effects) = update(state, Msg::CompareToggled("nurse".to_string()));
    assert_eq!(
        effects,
        vec![Effect::ToggleCompare {
            job_id: "nurse".to_string()
        }]
    );

    let catalog = sample_catalog();
    let (state, _) = update(state, Msg::CompareRejected("nurse".to_string()));
    assert_eq!(
        state.view(&catalog).notice,
        Some(Notice::CompareFull {
            job_id: "nurse".to_string()
        })
    );

    // Navigating away drops the notice.
    let (state, _) = update(state, Msg::SectorOpened("health".to_string()));
    assert_eq!(state.view(&catalog).notice, None);
}

#[test]
fn notice_is_dropped_by_the_next_user_message() {
    let catalog = sample_catalog();
    let (state, _) = update(BrowseState::new(), Msg::CompareRejected("nurse".to_string()));
    assert!(state.view(&catalog).notice.is_some());

    let (state, _) = update(state, Msg::SortSelected(SortOption::AlphabeticalDesc));
    assert_eq!(state.view(&catalog).notice, None);

    // Store feedback arriving after the rejection keeps it visible.
    let (state, _) = update(state, Msg::CompareRejected("nurse".to_string()));
    let (state, _) = update(state, Msg::RecentlyViewedLoaded(vec!["nurse".to_string()]));
    assert!(state.view(&catalog).notice.is_some());
    let (state, _) = update(state, Msg::FavoriteToggled("nurse".to_string()));
    assert_eq!(state.view(&catalog).notice, None);
}

#[test]
fn sector_selection_is_capped_and_compared_in_bulk() {
    let catalog = sample_catalog();
    let ids = ["web-dev", "data-sci", "cloud-eng"];

    // Outside a sector page selecting does nothing.
    let (state, _) = update(BrowseState::new(), Msg::SectorJobSelected("web-dev".to_string()));
    assert!(state.selected().is_empty());

    let (state, _) = update(state, Msg::SectorOpened("tech".to_string()));
    let (state, _) = update(state, Msg::SectorJobSelected(ids[0].to_string()));
    let (state, effects) = update(state, Msg::CompareSelectedRequested);
    assert!(effects.is_empty());
    assert_eq!(
        state.view(&catalog).notice,
        Some(Notice::SelectionTooSmall { selected: 1 })
    );

    let mut state = state;
    for id in &ids[1..] {
        state = update(state, Msg::SectorJobSelected(id.to_string())).0;
    }
    assert_eq!(state.selected().len(), SELECTION_LIMIT);
    let (state, _) = update(state, Msg::SectorJobSelected("web-dev".to_string()));
    let (state, _) = update(state, Msg::SectorJobSelected("web-dev".to_string()));
    // Unticking frees a slot; ticking again appends.
    assert_eq!(state.selected(), ["data-sci", "cloud-eng", "web-dev"]);

    let (state, _) = update(state, Msg::SectorJobSelected("nurse".to_string()));
    assert_eq!(
        state.view(&catalog).notice,
        Some(Notice::SelectionFull {
            job_id: "nurse".to_string()
        })
    );
    let ScreenView::Sector(Some(page)) = state.view(&catalog).screen else {
        panic!("expected sector page");
    };
    assert_eq!(page.selected, vec!["data-sci", "cloud-eng", "web-dev"]);

    let (mut state, effects) = update(state, Msg::CompareSelectedRequested);
    assert_eq!(
        effects,
        vec![Effect::AddToCompare {
            job_ids: vec![
                "data-sci".to_string(),
                "cloud-eng".to_string(),
                "web-dev".to_string()
            ]
        }]
    );
    assert!(state.selected().is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn leaving_the_sector_drops_the_selection() {
    let (state, _) = update(BrowseState::new(), Msg::SectorOpened("tech".to_string()));
    let (state, _) = update(state, Msg::SectorJobSelected("web-dev".to_string()));
    let (state, _) = update(state, Msg::HomeRequested);
    assert!(state.selected().is_empty());
}

#[test]
fn home_lists_recently_viewed_in_dataset_order() {
    let catalog = sample_catalog();
    let (mut state, _) = update(
        BrowseState::new(),
        Msg::RecentlyViewedLoaded(vec!["pharmacist".to_string(), "web-dev".to_string()]),
    );
    assert!(state.consume_dirty());
    let ScreenView::Home { recent, .. } = state.view(&catalog).screen else {
        panic!("expected home");
    };
    let ids: Vec<_> = recent.iter().map(|row| row.job_id.as_str()).collect();
    assert_eq!(ids, vec!["web-dev", "pharmacist"]);
}
