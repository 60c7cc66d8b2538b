use career_core::{Effect, Msg};
use career_logging::{career_debug, career_info};
use career_store::{CompareToggle, KeyValueStore, UserStateStore};

/// Applies effects to the user state store and returns the messages they
/// produce in turn.
pub(crate) fn run_effects<S: KeyValueStore>(
    store: &mut UserStateStore<S>,
    effects: Vec<Effect>,
) -> Vec<Msg> {
    let mut follow_up = Vec::new();
    for effect in effects {
        match effect {
            Effect::RecordSearch { query } => {
                career_debug!("RecordSearch query_len={}", query.len());
                store.add_search_history(&query);
            }
            Effect::RecordView { job_id } => {
                store.record_job_view(&job_id);
                career_debug!(
                    "RecordView job_id={} views={}",
                    job_id,
                    store.view_count(&job_id)
                );
                follow_up.push(Msg::RecentlyViewedLoaded(store.recently_viewed()));
            }
            Effect::ToggleFavorite { job_id } => {
                let now_favorite = store.toggle_favorite(&job_id);
                career_info!("ToggleFavorite job_id={} favorite={}", job_id, now_favorite);
            }
            Effect::ToggleCompare { job_id } => match store.toggle_compare(&job_id) {
                CompareToggle::Added | CompareToggle::Removed => {}
                CompareToggle::Full => {
                    career_info!("Compare list full, rejected job_id={}", job_id);
                    follow_up.push(Msg::CompareRejected(job_id));
                }
            },
            Effect::AddToCompare { job_ids } => {
                let rejected = job_ids
                    .iter()
                    .filter(|job_id| !store.add_to_compare(job_id))
                    .count();
                career_info!(
                    "AddToCompare requested={} rejected={} compare_len={}",
                    job_ids.len(),
                    rejected,
                    store.compare_list().len()
                );
            }
        }
    }
    follow_up
}
