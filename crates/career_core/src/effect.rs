/// Side effects requested by [`crate::update`] and carried out by the front end
/// against the user state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RecordSearch { query: String },
    RecordView { job_id: crate::JobId },
    ToggleFavorite { job_id: crate::JobId },
    ToggleCompare { job_id: crate::JobId },
    /// Adds each id to the compare list, skipping ones already there and
    /// stopping at the list's limit.
    AddToCompare { job_ids: Vec<crate::JobId> },
}
