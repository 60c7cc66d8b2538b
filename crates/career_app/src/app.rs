use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use career_core::{update, BrowseState, Catalog, Effect, Msg, Screen};
use career_logging::career_warn;
use career_store::{
    theme_color_by_name, KeyValueStore, Locale, ThemeColor, UserStateStore, COMPARE_LIMIT,
    THEME_COLORS,
};

use crate::commands::{parse_command, Command, HELP};
use crate::effects::run_effects;
use crate::render::{render_compare, render_history, render_jobs, render_view};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Continue(String),
    Quit,
}

/// Owns the catalog, the user state store and the browse state for one session.
pub(crate) struct App<S> {
    catalog: Catalog,
    store: UserStateStore<S>,
    state: BrowseState,
}

impl<S: KeyValueStore> App<S> {
    pub(crate) fn new(catalog: Catalog, store: UserStateStore<S>) -> Self {
        let (mut state, _) = update(
            BrowseState::new(),
            Msg::RecentlyViewedLoaded(store.recently_viewed()),
        );
        state.consume_dirty();
        Self {
            catalog,
            store,
            state,
        }
    }

    pub(crate) fn greeting(&self) -> String {
        format!(
            "Career guide: {} careers across {} sectors (theme {}, language {})\n{}",
            self.catalog.jobs().len(),
            self.catalog.sectors().len(),
            self.store.theme(),
            self.store.locale().code(),
            render_view(&self.state.view(&self.catalog))
        )
    }

    pub(crate) fn handle_line(&mut self, line: &str) -> Step {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Step::Continue(String::new()),
            Err(err) => return Step::Continue(format!("{err}\n")),
        };

        let output = match command {
            Command::Browse(msgs) => self.dispatch(msgs),
            Command::SelectJob(job_id) => {
                let on_page = match (self.state.screen(), self.catalog.job(&job_id)) {
                    (Screen::Sector(sector_id), Some(job)) => job.sector_id == *sector_id,
                    _ => false,
                };
                if on_page {
                    self.dispatch(vec![Msg::SectorJobSelected(job_id)])
                } else {
                    format!("{job_id} is not on the open sector page\n")
                }
            }
            Command::ShowFavorites => {
                render_jobs("Favorites", &self.catalog.jobs_by_ids(&self.store.favorites()))
            }
            Command::ShowRecent => render_jobs(
                "Recently viewed",
                &self.catalog.jobs_by_ids(&self.store.recently_viewed()),
            ),
            Command::ShowCompare => {
                render_compare(&self.catalog.jobs_by_ids(&self.store.compare_list()))
            }
            Command::ShowHistory => render_history(&self.store.search_history()),
            Command::RerunHistory(position) => {
                match self.store.search_history().get(position - 1).cloned() {
                    Some(query) => self.dispatch(vec![Msg::HistoryEntrySelected(query)]),
                    None => format!("no history entry {position}\n"),
                }
            }
            Command::ClearHistory => {
                self.store.clear_search_history();
                "Search history cleared\n".to_owned()
            }
            Command::ClearCompare => {
                self.store.clear_compare_list();
                "Compare list cleared\n".to_owned()
            }
            Command::ToggleTheme => format!("theme: {}\n", self.store.toggle_theme()),
            Command::SetColor(name) => match theme_color_by_name(&name) {
                Some(color) => {
                    self.store.set_theme_color(ThemeColor::from(color));
                    format!("theme color: {} ({})\n", color.name, color.value)
                }
                None => {
                    let names: Vec<_> = THEME_COLORS.iter().map(|c| c.name).collect();
                    format!("unknown color {name:?}, pick one of {}\n", names.join(", "))
                }
            },
            Command::SetLanguage(code) => match Locale::from_code(&code) {
                Some(locale) => {
                    self.store.set_locale(locale);
                    format!("language: {}\n", locale.code())
                }
                None => format!("unknown language {code:?}, pick en, hi or te\n"),
            },
            Command::Help => format!("{HELP}\n"),
            Command::Quit => return Step::Quit,
        };
        Step::Continue(output)
    }

    /// Feeds messages through the state machine, running effects against the
    /// store until no follow-up messages remain.
    fn dispatch(&mut self, msgs: Vec<Msg>) -> String {
        let mut queue: VecDeque<Msg> = msgs.into();
        let mut status = String::new();
        while let Some(msg) = queue.pop_front() {
            let toggled = match &msg {
                Msg::FavoriteToggled(id) | Msg::CompareToggled(id) => Some(id.clone()),
                _ => None,
            };
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            let bulk_compare = effects
                .iter()
                .any(|effect| matches!(effect, Effect::AddToCompare { .. }));
            queue.extend(run_effects(&mut self.store, effects));
            if let Some(job_id) = toggled {
                status.push_str(&self.job_status(&job_id));
            }
            if bulk_compare {
                status.push_str(&render_compare(
                    &self.catalog.jobs_by_ids(&self.store.compare_list()),
                ));
            }
        }

        let mut output = String::new();
        if self.state.consume_dirty() {
            output.push_str(&render_view(&self.state.view(&self.catalog)));
        }
        output.push_str(&status);
        output
    }

    fn job_status(&self, job_id: &str) -> String {
        let name = match self.catalog.job(job_id) {
            Some(job) => job.name.as_str(),
            None => job_id,
        };
        format!(
            "{name}: favorite={} compare={} ({}/{})\n",
            self.store.is_favorite(job_id),
            self.store.is_in_compare_list(job_id),
            self.store.compare_list().len(),
            COMPARE_LIMIT
        )
    }
}

/// Reads commands from `input` until end of input or `quit`.
pub(crate) fn run_session<S, R, W>(app: &mut App<S>, input: R, mut output: W) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    output.write_all(app.greeting().as_bytes())?;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                career_warn!("Stopping on unreadable input: {}", err);
                break;
            }
        };
        match app.handle_line(&line) {
            Step::Continue(text) => {
                output.write_all(text.as_bytes())?;
                output.flush()?;
            }
            Step::Quit => break,
        }
    }
    Ok(())
}
