use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub type JobId = String;
pub type SectorId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Stable identifier handed to the translation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub min: u64,
    pub max: u64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateKind {
    Required,
    Optional,
}

impl CertificateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CertificateKind::Required => "required",
            CertificateKind::Optional => "optional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub kind: CertificateKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    Udemy,
    Coursera,
    Unacademy,
    Other,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Udemy => "Udemy",
            Platform::Coursera => "Coursera",
            Platform::Unacademy => "Unacademy",
            Platform::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Free,
    Paid,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::Free => "free",
            LinkKind::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
    pub platform: Platform,
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub icon: String,
    pub sector_id: SectorId,
    pub description: String,
    pub detailed_description: String,
    pub salary: Salary,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    pub roadmap: Vec<RoadmapStep>,
    pub certificates: Vec<Certificate>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub gradient: Gradient,
}

/// Upper bound of the salary slider in the filter sheet.
pub const SALARY_CEILING: u64 = 500_000;

/// Ephemeral filter parameters. Empty sets mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub skills: BTreeSet<String>,
    /// Inclusive `(min, max)` bounds a job's whole salary range must fit in.
    pub salary_range: (u64, u64),
    pub difficulty: BTreeSet<Difficulty>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            skills: BTreeSet::new(),
            salary_range: (0, SALARY_CEILING),
            difficulty: BTreeSet::new(),
        }
    }
}

impl FilterOptions {
    pub fn toggle_skill(&mut self, skill: &str) {
        if !self.skills.remove(skill) {
            self.skills.insert(skill.to_owned());
        }
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        if !self.difficulty.remove(&difficulty) {
            self.difficulty.insert(difficulty);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    AlphabeticalAsc,
    AlphabeticalDesc,
    MostViewed,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::AlphabeticalAsc,
        SortOption::AlphabeticalDesc,
        SortOption::MostViewed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::AlphabeticalAsc => "alphabetical-asc",
            SortOption::AlphabeticalDesc => "alphabetical-desc",
            SortOption::MostViewed => "most-viewed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
