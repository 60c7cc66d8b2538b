#![allow(dead_code)]

use career_core::{Catalog, Difficulty, Gradient, Job, Salary, Sector};

pub fn job(id: &str, name: &str, sector_id: &str) -> Job {
    Job {
        id: id.to_string(),
        name: name.to_string(),
        icon: "💼".to_string(),
        sector_id: sector_id.to_string(),
        description: format!("{name} short description"),
        detailed_description: format!("{name} long description"),
        salary: Salary {
            min: 50_000,
            max: 90_000,
            currency: "USD".to_string(),
        },
        skills: Vec::new(),
        difficulty: Difficulty::Intermediate,
        roadmap: Vec::new(),
        certificates: Vec::new(),
        links: Vec::new(),
    }
}

pub fn with_skills(mut job: Job, skills: &[&str]) -> Job {
    job.skills = skills.iter().map(|s| s.to_string()).collect();
    job
}

pub fn with_salary(mut job: Job, min: u64, max: u64) -> Job {
    job.salary.min = min;
    job.salary.max = max;
    job
}

pub fn with_difficulty(mut job: Job, difficulty: Difficulty) -> Job {
    job.difficulty = difficulty;
    job
}

pub fn sector(id: &str, name: &str) -> Sector {
    Sector {
        id: id.to_string(),
        name: name.to_string(),
        icon: "🏢".to_string(),
        description: format!("{name} careers"),
        gradient: Gradient {
            from: "#111111".to_string(),
            to: "#222222".to_string(),
        },
    }
}

/// Two sectors, five jobs; dataset order is deliberately not alphabetical.
pub fn sample_catalog() -> Catalog {
    let sectors = vec![sector("tech", "Technology"), sector("health", "Healthcare")];
    let jobs = vec![
        with_skills(
            with_salary(job("web-dev", "Web Developer", "tech"), 40_000, 120_000),
            &["JavaScript", "React", "Git"],
        ),
        with_difficulty(
            with_skills(
                with_salary(job("data-sci", "Data Scientist", "tech"), 80_000, 160_000),
                &["Python", "Machine Learning", "SQL"],
            ),
            Difficulty::Advanced,
        ),
        with_difficulty(
            with_skills(job("nurse", "Nurse", "health"), &["Patient Care"]),
            Difficulty::Beginner,
        ),
        with_skills(
            with_salary(job("cloud-eng", "Cloud Engineer", "tech"), 90_000, 170_000),
            &["AWS", "Docker", "DevOps"],
        ),
        with_skills(job("pharmacist", "Pharmacist", "health"), &["Chemistry"]),
    ];
    Catalog::new(sectors, jobs)
}

pub fn ids(jobs: &[&Job]) -> Vec<String> {
    jobs.iter().map(|job| job.id.clone()).collect()
}
