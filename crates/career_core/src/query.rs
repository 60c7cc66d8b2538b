use std::cmp::Ordering;

use crate::{FilterOptions, Job, Sector, SortOption};

/// Maximum number of entries in the search-as-you-type suggestion list.
pub const SUGGESTION_LIMIT: usize = 5;

/// Anything that can be ordered by display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Job {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Sector {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Full search view: matches name, description, detailed description and
/// skills. A blank query returns every job.
pub fn search_jobs<'a, I>(query: &str, jobs: I) -> Vec<&'a Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    if query.trim().is_empty() {
        return jobs.into_iter().collect();
    }
    let needle = query.to_lowercase();
    jobs.into_iter()
        .filter(|job| {
            contains_folded(&job.name, &needle)
                || contains_folded(&job.description, &needle)
                || contains_folded(&job.detailed_description, &needle)
                || skills_match(job, &needle)
        })
        .collect()
}

/// Suggestion view: matches name, description and skills, capped at
/// [`SUGGESTION_LIMIT`]. A blank query suggests nothing.
pub fn suggest_jobs<'a, I>(query: &str, jobs: I) -> Vec<&'a Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    jobs.into_iter()
        .filter(|job| {
            contains_folded(&job.name, &needle)
                || contains_folded(&job.description, &needle)
                || skills_match(job, &needle)
        })
        .take(SUGGESTION_LIMIT)
        .collect()
}

/// Keeps jobs satisfying every constraint in `options`, preserving order.
///
/// The salary test is containment: the job's whole range must sit inside
/// `options.salary_range`, overlapping is not enough.
pub fn filter_jobs<'a, I>(jobs: I, options: &FilterOptions) -> Vec<&'a Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    let (floor, ceiling) = options.salary_range;
    jobs.into_iter()
        .filter(|job| {
            let skills_match = options.skills.is_empty()
                || job.skills.iter().any(|skill| options.skills.contains(skill));
            let salary_match = job.salary.min >= floor && job.salary.max <= ceiling;
            let difficulty_match =
                options.difficulty.is_empty() || options.difficulty.contains(&job.difficulty);
            skills_match && salary_match && difficulty_match
        })
        .collect()
}

/// Returns a new sequence ordered by `option`.
///
/// `MostViewed` keeps the input order: view counts are tracked by the user
/// state store but are not consulted here.
pub fn sort_by_name<'a, T, I>(items: I, option: SortOption) -> Vec<&'a T>
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut sorted: Vec<&T> = items.into_iter().collect();
    match option {
        SortOption::AlphabeticalAsc => sorted.sort_by(|a, b| compare_names(a.name(), b.name())),
        SortOption::AlphabeticalDesc => sorted.sort_by(|a, b| compare_names(b.name(), a.name())),
        SortOption::MostViewed => {}
    }
    sorted
}

/// All jobs of one sector, in dataset order.
pub fn jobs_for_sector<'a, I>(sector_id: &str, jobs: I) -> Vec<&'a Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    jobs.into_iter()
        .filter(|job| job.sector_id == sector_id)
        .collect()
}

/// Case-insensitive primary comparison; case only breaks ties, lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn skills_match(job: &Job, needle: &str) -> bool {
    job.skills.iter().any(|skill| contains_folded(skill, needle))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::compare_names;

    #[test]
    fn case_is_ignored_before_ties() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn lowercase_sorts_first_on_case_only_difference() {
        assert_eq!(compare_names("data", "Data"), Ordering::Less);
        assert_eq!(compare_names("Data", "Data"), Ordering::Equal);
    }
}
