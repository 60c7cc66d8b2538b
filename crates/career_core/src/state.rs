use crate::{FilterOptions, JobId, SectorId, SortOption};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Sector(SectorId),
    Job(JobId),
    SearchResults { query: String },
    FilterResults,
}

/// Most jobs that can be picked at once on a sector page.
pub const SELECTION_LIMIT: usize = 3;
/// Fewest picked jobs that can be sent to the compare list together.
pub const SELECTION_MINIMUM: usize = 2;

/// Transient message shown once by the front end. Any later user message
/// clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CompareFull { job_id: JobId },
    SelectionFull { job_id: JobId },
    SelectionTooSmall { selected: usize },
}

/// Ephemeral browsing state: which screen is shown and with which query
/// parameters. Personalization lives in the user state store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseState {
    screen: Screen,
    home_sort: SortOption,
    sector_sort: SortOption,
    filters: FilterOptions,
    query: String,
    /// Jobs picked on the open sector page, in pick order.
    selected: Vec<JobId>,
    /// Recently viewed ids as last loaded from the store.
    recent: Vec<JobId>,
    notice: Option<Notice>,
    dirty: bool,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    /// Sort option of the listing currently on screen.
    pub fn active_sort(&self) -> SortOption {
        match self.screen {
            Screen::Sector(_) => self.sector_sort,
            _ => self.home_sort,
        }
    }

    pub fn selected(&self) -> &[JobId] {
        &self.selected
    }

    pub(crate) fn recent(&self) -> &[JobId] {
        &self.recent
    }

    pub(crate) fn home_sort(&self) -> SortOption {
        self.home_sort
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            // A freshly mounted sector page starts from the default order.
            if matches!(screen, Screen::Sector(_)) {
                self.sector_sort = SortOption::default();
            }
            self.screen = screen;
            self.selected.clear();
            self.notice = None;
            self.dirty = true;
        }
    }

    pub(crate) fn set_active_sort(&mut self, option: SortOption) {
        let slot = match self.screen {
            Screen::Sector(_) => &mut self.sector_sort,
            _ => &mut self.home_sort,
        };
        if *slot != option {
            *slot = option;
            self.dirty = true;
        }
    }

    pub(crate) fn set_filters(&mut self, filters: FilterOptions) {
        if self.filters != filters {
            self.filters = filters;
            self.dirty = true;
        }
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    pub(crate) fn take_query(&mut self) -> String {
        let query = std::mem::take(&mut self.query);
        if !query.is_empty() {
            self.dirty = true;
        }
        query
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    /// Drops a notice that has already been shown. Not a visible change on
    /// its own, so the dirty flag is left alone.
    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Adds or removes `job_id` from the selection. Returns `false` when the
    /// selection is full and `job_id` was not added.
    pub(crate) fn toggle_selected(&mut self, job_id: JobId) -> bool {
        if let Some(position) = self.selected.iter().position(|id| *id == job_id) {
            self.selected.remove(position);
        } else if self.selected.len() < SELECTION_LIMIT {
            self.selected.push(job_id);
        } else {
            return false;
        }
        self.dirty = true;
        true
    }

    pub(crate) fn take_selected(&mut self) -> Vec<JobId> {
        let selected = std::mem::take(&mut self.selected);
        if !selected.is_empty() {
            self.dirty = true;
        }
        selected
    }

    pub(crate) fn set_recent(&mut self, recent: Vec<JobId>) {
        if self.recent != recent {
            self.recent = recent;
            self.dirty = true;
        }
    }
}
