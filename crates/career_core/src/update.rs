use crate::state::{Notice, Screen, SELECTION_MINIMUM};
use crate::{BrowseState, Effect, FilterOptions, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BrowseState, msg: Msg) -> (BrowseState, Vec<Effect>) {
    // Notices last until the next user message; store feedback keeps them.
    if !matches!(msg, Msg::CompareRejected(_) | Msg::RecentlyViewedLoaded(_)) {
        state.clear_notice();
    }

    let effects = match msg {
        Msg::SortSelected(option) => {
            state.set_active_sort(option);
            Vec::new()
        }
        Msg::FiltersApplied(filters) => {
            state.set_filters(filters);
            state.navigate(Screen::FilterResults);
            Vec::new()
        }
        Msg::FiltersReset => {
            state.set_filters(FilterOptions::default());
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            if state.query().trim().is_empty() {
                return (state, Vec::new());
            }
            let query = state.take_query();
            submit_search(&mut state, query)
        }
        Msg::HistoryEntrySelected(query) => {
            if query.trim().is_empty() {
                return (state, Vec::new());
            }
            state.take_query();
            submit_search(&mut state, query)
        }
        Msg::SectorOpened(sector_id) => {
            state.navigate(Screen::Sector(sector_id));
            Vec::new()
        }
        Msg::JobOpened(job_id) => {
            state.navigate(Screen::Job(job_id.clone()));
            vec![Effect::RecordView { job_id }]
        }
        Msg::FavoriteToggled(job_id) => vec![Effect::ToggleFavorite { job_id }],
        Msg::CompareToggled(job_id) => vec![Effect::ToggleCompare { job_id }],
        Msg::CompareRejected(job_id) => {
            state.set_notice(Notice::CompareFull { job_id });
            Vec::new()
        }
        Msg::SectorJobSelected(job_id) => {
            if !matches!(state.screen(), Screen::Sector(_)) {
                return (state, Vec::new());
            }
            if !state.toggle_selected(job_id.clone()) {
                state.set_notice(Notice::SelectionFull { job_id });
            }
            Vec::new()
        }
        Msg::CompareSelectedRequested => {
            if !matches!(state.screen(), Screen::Sector(_)) {
                return (state, Vec::new());
            }
            let selected = state.selected().len();
            if selected < SELECTION_MINIMUM {
                state.set_notice(Notice::SelectionTooSmall { selected });
                return (state, Vec::new());
            }
            vec![Effect::AddToCompare {
                job_ids: state.take_selected(),
            }]
        }
        Msg::RecentlyViewedLoaded(job_ids) => {
            state.set_recent(job_ids);
            Vec::new()
        }
        Msg::HomeRequested => {
            state.navigate(Screen::Home);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit_search(state: &mut BrowseState, query: String) -> Vec<Effect> {
    state.navigate(Screen::SearchResults {
        query: query.clone(),
    });
    vec![Effect::RecordSearch { query }]
}
