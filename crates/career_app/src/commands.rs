use career_core::{Difficulty, FilterOptions, Msg, SortOption};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  home | back                 list sectors
  sector <id>                 open a sector
  job <id>                    open a job
  search <text>               full search
  suggest <text>              search-as-you-type suggestions
  sort asc|desc|views         sort the current listing
  filter [skill=<s>] [difficulty=<d>] [min=<n>] [max=<n>]
  filter reset                reset the filter sheet
  fav <id> | compare <id>     toggle favorite / compare
  select <id>                 tick a job on the open sector page
  compare-selected            add the ticked jobs to the compare list
  favorites | compare | recent | history
  history <n>                 rerun the n-th history entry
  clear-history | clear-compare
  theme | color <name> | lang en|hi|te
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Messages for the browse state machine, applied in order.
    Browse(Vec<Msg>),
    /// Tick or untick a job on the open sector page.
    SelectJob(String),
    ShowFavorites,
    ShowCompare,
    ShowRecent,
    ShowHistory,
    RerunHistory(usize),
    ClearHistory,
    ClearCompare,
    ToggleTheme,
    SetColor(String),
    SetLanguage(String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid value {value:?} for {what}")]
    InvalidValue { what: &'static str, value: String },
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "home" | "back" | "sectors" => Command::Browse(vec![Msg::HomeRequested]),
        "sector" => Command::Browse(vec![Msg::SectorOpened(required(rest, "sector")?)]),
        "job" => Command::Browse(vec![Msg::JobOpened(required(rest, "job")?)]),
        "search" => Command::Browse(vec![
            Msg::QueryChanged(required(rest, "search")?),
            Msg::SearchSubmitted,
        ]),
        "suggest" => Command::Browse(vec![Msg::QueryChanged(rest.to_owned())]),
        "sort" => Command::Browse(vec![Msg::SortSelected(parse_sort(&required(
            rest, "sort",
        )?)?)]),
        "filter" => match rest {
            "reset" => Command::Browse(vec![Msg::FiltersReset]),
            _ => Command::Browse(vec![Msg::FiltersApplied(parse_filters(rest)?)]),
        },
        "fav" => Command::Browse(vec![Msg::FavoriteToggled(required(rest, "fav")?)]),
        "compare" if rest.is_empty() => Command::ShowCompare,
        "compare" => Command::Browse(vec![Msg::CompareToggled(rest.to_owned())]),
        "select" => Command::SelectJob(required(rest, "select")?),
        "compare-selected" => Command::Browse(vec![Msg::CompareSelectedRequested]),
        "favorites" => Command::ShowFavorites,
        "recent" => Command::ShowRecent,
        "history" if rest.is_empty() => Command::ShowHistory,
        "history" => Command::RerunHistory(parse_index(rest)?),
        "clear-history" => Command::ClearHistory,
        "clear-compare" => Command::ClearCompare,
        "theme" => Command::ToggleTheme,
        "color" => Command::SetColor(required(rest, "color")?),
        "lang" => Command::SetLanguage(required(rest, "lang")?),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(Some(command))
}

fn required(rest: &str, command: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest.to_owned())
    }
}

fn parse_sort(raw: &str) -> Result<SortOption, CommandError> {
    match raw {
        "asc" => Ok(SortOption::AlphabeticalAsc),
        "desc" => Ok(SortOption::AlphabeticalDesc),
        "views" => Ok(SortOption::MostViewed),
        other => SortOption::parse(other).ok_or_else(|| CommandError::InvalidValue {
            what: "sort",
            value: other.to_owned(),
        }),
    }
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| CommandError::InvalidValue {
            what: "history entry",
            value: raw.to_owned(),
        })
}

/// `key=value` pairs separated by whitespace; skill names may not contain spaces
/// unless written with underscores (`skill=Machine_Learning`).
fn parse_filters(rest: &str) -> Result<FilterOptions, CommandError> {
    let mut filters = FilterOptions::default();
    for pair in rest.split_whitespace() {
        let invalid = || CommandError::InvalidValue {
            what: "filter",
            value: pair.to_owned(),
        };
        let (key, value) = pair.split_once('=').ok_or_else(invalid)?;
        match key {
            "skill" => filters.toggle_skill(&value.replace('_', " ")),
            "difficulty" => filters.toggle_difficulty(Difficulty::parse(value).ok_or_else(invalid)?),
            "min" => filters.salary_range.0 = value.parse().map_err(|_| invalid())?,
            "max" => filters.salary_range.1 = value.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        }
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use career_core::{Difficulty, FilterOptions, Msg, SortOption};
    use pretty_assertions::assert_eq;

    use super::{parse_command, Command, CommandError};

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn search_becomes_query_then_submit() {
        assert_eq!(
            parse_command("search  data science "),
            Ok(Some(Command::Browse(vec![
                Msg::QueryChanged("data science".to_string()),
                Msg::SearchSubmitted,
            ])))
        );
    }

    #[test]
    fn compare_without_argument_shows_list() {
        assert_eq!(parse_command("compare"), Ok(Some(Command::ShowCompare)));
        assert_eq!(
            parse_command("compare pharmacist"),
            Ok(Some(Command::Browse(vec![Msg::CompareToggled(
                "pharmacist".to_string()
            )])))
        );
    }

    #[test]
    fn selection_commands() {
        assert_eq!(
            parse_command("select pharmacist"),
            Ok(Some(Command::SelectJob("pharmacist".to_string())))
        );
        assert_eq!(
            parse_command("select"),
            Err(CommandError::MissingArgument("select"))
        );
        assert_eq!(
            parse_command("compare-selected"),
            Ok(Some(Command::Browse(vec![Msg::CompareSelectedRequested])))
        );
    }

    #[test]
    fn sort_accepts_short_and_full_names() {
        assert_eq!(
            parse_command("sort views"),
            Ok(Some(Command::Browse(vec![Msg::SortSelected(
                SortOption::MostViewed
            )])))
        );
        assert_eq!(
            parse_command("sort alphabetical-desc"),
            Ok(Some(Command::Browse(vec![Msg::SortSelected(
                SortOption::AlphabeticalDesc
            )])))
        );
        assert!(matches!(
            parse_command("sort random"),
            Err(CommandError::InvalidValue { what: "sort", .. })
        ));
    }

    #[test]
    fn filter_pairs_build_options() {
        let mut expected = FilterOptions::default();
        expected.toggle_skill("Machine Learning");
        expected.toggle_skill("SQL");
        expected.toggle_difficulty(Difficulty::Advanced);
        expected.salary_range = (10_000, 200_000);

        assert_eq!(
            parse_command("filter skill=Machine_Learning skill=SQL difficulty=advanced min=10000 max=200000"),
            Ok(Some(Command::Browse(vec![Msg::FiltersApplied(expected)])))
        );
        assert!(parse_command("filter level=3").is_err());
        assert!(parse_command("filter difficulty=expert").is_err());
        assert_eq!(
            parse_command("filter reset"),
            Ok(Some(Command::Browse(vec![Msg::FiltersReset])))
        );
    }

    #[test]
    fn missing_arguments_and_unknown_words_are_errors() {
        assert_eq!(parse_command("job"), Err(CommandError::MissingArgument("job")));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert!(parse_command("history 0").is_err());
        assert_eq!(parse_command("history 2"), Ok(Some(Command::RerunHistory(2))));
    }
}
