pub(crate) mod comic;
pub use comic::{Chapter, ChapterSummary, Comic, ComicId, ComicStatus, SearchableRecord};

pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, CaseMatching, FieldWeights, HistoryConfig, ReaderConfig,
    SearchSettings, ShortcutsConfig,
};

pub(crate) mod shortcut;
pub use shortcut::{KeyChord, ShortcutError};

pub(crate) mod slug;
pub use slug::{Slug, SlugError};

pub(crate) mod term;
pub use term::{MAX_TERM_LENGTH, SearchTerm, SearchTermError};
