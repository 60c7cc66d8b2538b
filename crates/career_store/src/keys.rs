//! Logical keys in the persistence medium. All share [`KEY_PREFIX`].

pub const KEY_PREFIX: &str = "careerguide_";

pub const FAVORITES: &str = "careerguide_favorites";
pub const RECENTLY_VIEWED: &str = "careerguide_recently_viewed";
pub const SEARCH_HISTORY: &str = "careerguide_search_history";
pub const COMPARE_LIST: &str = "careerguide_compare_list";
pub const VIEW_COUNT: &str = "careerguide_view_count";
pub const THEME: &str = "careerguide_theme";
pub const THEME_COLOR: &str = "careerguide_theme_color";
pub const LANGUAGE: &str = "careerguide_language";

pub const ALL: [&str; 8] = [
    FAVORITES,
    RECENTLY_VIEWED,
    SEARCH_HISTORY,
    COMPARE_LIST,
    VIEW_COUNT,
    THEME,
    THEME_COLOR,
    LANGUAGE,
];
