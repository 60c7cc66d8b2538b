//! Career guide core: catalog model, query engine and the pure browse state machine.
mod catalog;
mod currency;
mod effect;
mod model;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use catalog::{Catalog, SKILL_VOCABULARY};
pub use currency::{format_to_inr, salary_bound_display, salary_display, USD_TO_INR};
pub use effect::Effect;
pub use model::{
    Certificate, CertificateKind, Difficulty, FilterOptions, Gradient, Job, JobId, Link, LinkKind,
    Platform, RoadmapStep, Salary, Sector, SectorId, SortOption, SALARY_CEILING,
};
pub use msg::Msg;
pub use query::{
    compare_names, filter_jobs, jobs_for_sector, search_jobs, sort_by_name, suggest_jobs, Named,
    SUGGESTION_LIMIT,
};
pub use state::{BrowseState, Notice, Screen, SELECTION_LIMIT, SELECTION_MINIMUM};
pub use update::update;
pub use view_model::{
    BrowseViewModel, JobDetailView, JobRowView, ScreenView, SectorPageView, SectorRowView,
};
