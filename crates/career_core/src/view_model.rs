use crate::currency::salary_display;
use crate::query::{filter_jobs, search_jobs, sort_by_name, suggest_jobs};
use crate::state::{Notice, Screen};
use crate::{BrowseState, Catalog, Difficulty, FilterOptions, Job, JobId, SectorId, SortOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorRowView {
    pub sector_id: SectorId,
    pub name: String,
    pub icon: String,
    pub job_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub name: String,
    pub icon: String,
    pub salary: String,
    pub difficulty: Difficulty,
}

impl JobRowView {
    fn from_job(job: &Job) -> Self {
        Self {
            job_id: job.id.clone(),
            name: job.name.clone(),
            icon: job.icon.clone(),
            salary: salary_display(&job.salary),
            difficulty: job.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorPageView {
    pub sector_id: SectorId,
    pub name: String,
    pub description: String,
    pub jobs: Vec<JobRowView>,
    /// Ids ticked for a bulk compare, in pick order.
    pub selected: Vec<JobId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetailView {
    pub job: Job,
    pub sector_name: String,
    pub salary: String,
}

/// What the current screen shows. Entity screens carry `None` when the id is
/// not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    /// `recent` is in dataset order, like the favorites and compare lists.
    Home {
        sectors: Vec<SectorRowView>,
        recent: Vec<JobRowView>,
    },
    Sector(Option<SectorPageView>),
    Job(Option<JobDetailView>),
    SearchResults { query: String, jobs: Vec<JobRowView> },
    FilterResults { jobs: Vec<JobRowView> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseViewModel {
    pub screen: ScreenView,
    pub sort: SortOption,
    pub filters: FilterOptions,
    pub query: String,
    pub suggestions: Vec<JobRowView>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

impl BrowseState {
    pub fn view(&self, catalog: &Catalog) -> BrowseViewModel {
        let screen = match self.screen() {
            Screen::Home => ScreenView::Home {
                sectors: sort_by_name(catalog.sectors(), self.home_sort())
                    .into_iter()
                    .map(|sector| SectorRowView {
                        sector_id: sector.id.clone(),
                        name: sector.name.clone(),
                        icon: sector.icon.clone(),
                        job_count: catalog.jobs_in_sector(&sector.id).len(),
                    })
                    .collect(),
                recent: rows(catalog.jobs_by_ids(self.recent())),
            },
            Screen::Sector(sector_id) => {
                ScreenView::Sector(catalog.sector(sector_id).map(|sector| SectorPageView {
                    sector_id: sector.id.clone(),
                    name: sector.name.clone(),
                    description: sector.description.clone(),
                    jobs: rows(sort_by_name(
                        catalog.jobs_in_sector(&sector.id),
                        self.active_sort(),
                    )),
                    selected: self.selected().to_vec(),
                }))
            }
            Screen::Job(job_id) => ScreenView::Job(catalog.job(job_id).and_then(|job| {
                // A job whose sector is missing renders as not found.
                catalog.sector_of(job).map(|sector| JobDetailView {
                    job: job.clone(),
                    sector_name: sector.name.clone(),
                    salary: salary_display(&job.salary),
                })
            })),
            Screen::SearchResults { query } => ScreenView::SearchResults {
                query: query.clone(),
                jobs: rows(search_jobs(query, catalog.jobs())),
            },
            Screen::FilterResults => ScreenView::FilterResults {
                jobs: rows(filter_jobs(catalog.jobs(), self.filters())),
            },
        };

        BrowseViewModel {
            screen,
            sort: self.active_sort(),
            filters: self.filters().clone(),
            query: self.query().to_owned(),
            suggestions: rows(suggest_jobs(self.query(), catalog.jobs())),
            notice: self.notice().cloned(),
            dirty: self.dirty(),
        }
    }
}

fn rows(jobs: Vec<&Job>) -> Vec<JobRowView> {
    jobs.into_iter().map(JobRowView::from_job).collect()
}
