#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a sort option on the current listing.
    SortSelected(crate::SortOption),
    /// User applied the filter sheet.
    FiltersApplied(crate::FilterOptions),
    /// User pressed Reset in the filter sheet.
    FiltersReset,
    /// User edited the search box.
    QueryChanged(String),
    /// User submitted the current search box contents.
    SearchSubmitted,
    /// User picked an entry from the search history.
    HistoryEntrySelected(String),
    /// User opened a sector page.
    SectorOpened(crate::SectorId),
    /// User opened a job detail page.
    JobOpened(crate::JobId),
    /// User tapped the favorite toggle on a job.
    FavoriteToggled(crate::JobId),
    /// User tapped the compare toggle on a job.
    CompareToggled(crate::JobId),
    /// The store refused a compare add because the list is full.
    CompareRejected(crate::JobId),
    /// User ticked or unticked a job on the open sector page.
    SectorJobSelected(crate::JobId),
    /// User asked to compare the jobs ticked on the sector page.
    CompareSelectedRequested,
    /// Recently viewed ids read back from the store.
    RecentlyViewedLoaded(Vec<crate::JobId>),
    /// User navigated back to the home screen.
    HomeRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
