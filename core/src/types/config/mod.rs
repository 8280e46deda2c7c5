mod app;

pub use app::{
    AppConfig, AppConfigError, CaseMatching, FieldWeights, HistoryConfig, ReaderConfig,
    SearchSettings, ShortcutsConfig,
};
