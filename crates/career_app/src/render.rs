use std::fmt::Write;

use career_core::{
    salary_bound_display, salary_display, BrowseViewModel, FilterOptions, Job, JobDetailView,
    JobRowView, Notice, ScreenView, SELECTION_LIMIT, SELECTION_MINIMUM,
};

/// Skills shown per job in the comparison table.
const COMPARE_SKILLS: usize = 3;

pub(crate) fn render_view(view: &BrowseViewModel) -> String {
    let mut out = String::new();
    match &view.notice {
        Some(Notice::CompareFull { job_id }) => {
            let _ = writeln!(out, "! compare list is full, {job_id} was not added");
        }
        Some(Notice::SelectionFull { job_id }) => {
            let _ = writeln!(
                out,
                "! you can compare up to {SELECTION_LIMIT} careers at a time, {job_id} was not selected"
            );
        }
        Some(Notice::SelectionTooSmall { selected }) => {
            let _ = writeln!(
                out,
                "! select at least {SELECTION_MINIMUM} careers to compare ({selected} selected)"
            );
        }
        None => {}
    }

    match &view.screen {
        ScreenView::Home { sectors, recent } => {
            let _ = writeln!(out, "Sectors ({}):", view.sort);
            for sector in sectors {
                let _ = writeln!(
                    out,
                    "  {} {} [{}] - {} careers",
                    sector.icon, sector.name, sector.sector_id, sector.job_count
                );
            }
            if !recent.is_empty() {
                out.push_str("Recently viewed:\n");
                push_rows(&mut out, recent);
            }
        }
        ScreenView::Sector(None) => out.push_str("Sector not found\n"),
        ScreenView::Sector(Some(page)) => {
            let _ = writeln!(out, "{} - {}", page.name, page.description);
            let _ = writeln!(out, "{} careers available ({})", page.jobs.len(), view.sort);
            for row in &page.jobs {
                let mark = if page.selected.contains(&row.job_id) { "x" } else { " " };
                let _ = writeln!(
                    out,
                    "  [{mark}] {} {} [{}] {} ({})",
                    row.icon, row.name, row.job_id, row.salary, row.difficulty
                );
            }
            if !page.selected.is_empty() {
                let _ = writeln!(
                    out,
                    "{}/{SELECTION_LIMIT} selected, `compare-selected` to compare",
                    page.selected.len()
                );
            }
        }
        ScreenView::Job(None) => out.push_str("Job not found\n"),
        ScreenView::Job(Some(detail)) => push_detail(&mut out, detail),
        ScreenView::SearchResults { query, jobs } => {
            let _ = writeln!(out, "Results for {query:?}: {}", jobs.len());
            push_rows(&mut out, jobs);
            if jobs.is_empty() {
                out.push_str("  no results, try different keywords\n");
            }
        }
        ScreenView::FilterResults { jobs } => {
            let _ = writeln!(out, "Filter {}: {} results", filter_summary(&view.filters), jobs.len());
            push_rows(&mut out, jobs);
        }
    }

    if !view.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions for {:?}:", view.query);
        push_rows(&mut out, &view.suggestions);
    }
    out
}

pub(crate) fn render_jobs(title: &str, jobs: &[&Job]) -> String {
    let mut out = format!("{title} ({}):\n", jobs.len());
    for job in jobs {
        let _ = writeln!(out, "  {} {} [{}] {}", job.icon, job.name, job.id, salary_display(&job.salary));
    }
    out
}

pub(crate) fn render_compare(jobs: &[&Job]) -> String {
    if jobs.is_empty() {
        return "Compare list is empty\n".to_owned();
    }
    let mut out = String::new();
    for job in jobs {
        let skills: Vec<&str> = job
            .skills
            .iter()
            .take(COMPARE_SKILLS)
            .map(String::as_str)
            .collect();
        let _ = writeln!(
            out,
            "{} {}\n  salary: {}\n  difficulty: {}\n  skills: {}\n  roadmap: {} steps, certificates: {}",
            job.icon,
            job.name,
            salary_display(&job.salary),
            job.difficulty,
            skills.join(", "),
            job.roadmap.len(),
            job.certificates.len()
        );
    }
    out
}

pub(crate) fn render_history(history: &[String]) -> String {
    if history.is_empty() {
        return "Search history is empty\n".to_owned();
    }
    let mut out = String::from("Search history:\n");
    for (index, query) in history.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, query);
    }
    out
}

fn push_rows(out: &mut String, rows: &[JobRowView]) {
    for row in rows {
        let _ = writeln!(
            out,
            "  {} {} [{}] {} ({})",
            row.icon, row.name, row.job_id, row.salary, row.difficulty
        );
    }
}

fn push_detail(out: &mut String, detail: &JobDetailView) {
    let job = &detail.job;
    let _ = writeln!(out, "{} {} ({})", job.icon, job.name, detail.sector_name);
    let _ = writeln!(out, "{}", job.detailed_description);
    let _ = writeln!(out, "salary: {}  difficulty: {}", detail.salary, job.difficulty);
    let _ = writeln!(out, "skills: {}", job.skills.join(", "));
    out.push_str("roadmap:\n");
    for step in &job.roadmap {
        let _ = writeln!(out, "  {}. {} - {}", step.step, step.title, step.description);
    }
    for certificate in &job.certificates {
        let _ = writeln!(
            out,
            "certificate: {} ({})",
            certificate.name,
            certificate.kind.as_str()
        );
    }
    for link in &job.links {
        let _ = writeln!(
            out,
            "link: {} on {} ({}) {}",
            link.name,
            link.platform.as_str(),
            link.kind.as_str(),
            link.url
        );
    }
}

fn filter_summary(filters: &FilterOptions) -> String {
    let mut parts = vec![format!(
        "{} to {}",
        salary_bound_display(filters.salary_range.0),
        salary_bound_display(filters.salary_range.1)
    )];
    if !filters.skills.is_empty() {
        parts.push(filters.skills.iter().cloned().collect::<Vec<_>>().join("/"));
    }
    if !filters.difficulty.is_empty() {
        parts.push(
            filters
                .difficulty
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join("/"),
        );
    }
    parts.join(", ")
}
