use crate::query::jobs_for_sector;
use crate::{Job, Sector};

/// Skills offered as toggles in the filter sheet.
pub const SKILL_VOCABULARY: [&str; 18] = [
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "SQL",
    "AWS",
    "Docker",
    "Git",
    "TypeScript",
    "Java",
    "C++",
    "Machine Learning",
    "DevOps",
    "Cloud",
    "Cybersecurity",
    "UI/UX",
    "Data Analysis",
    "Mobile Development",
];

/// Immutable dataset of sectors and jobs, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    sectors: Vec<Sector>,
    jobs: Vec<Job>,
}

impl Catalog {
    pub fn new(sectors: Vec<Sector>, jobs: Vec<Job>) -> Self {
        Self { sectors, jobs }
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn sector(&self, id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|sector| sector.id == id)
    }

    pub fn sector_of(&self, job: &Job) -> Option<&Sector> {
        self.sector(&job.sector_id)
    }

    pub fn jobs_in_sector(&self, sector_id: &str) -> Vec<&Job> {
        jobs_for_sector(sector_id, &self.jobs)
    }

    /// Resolves stored ids into jobs. Result follows dataset order, not the
    /// order of `ids`; unknown ids are skipped.
    pub fn jobs_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|job| ids.iter().any(|id| id.as_ref() == job.id))
            .collect()
    }

    pub fn skill_vocabulary(&self) -> &'static [&'static str] {
        &SKILL_VOCABULARY
    }
}
