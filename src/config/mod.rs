pub mod traits;
pub mod layout;
pub mod style;
pub mod preset;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use layout::{AggregateEntry, BatchLayout, INDEX_PLACEHOLDER};
pub use style::{ChartStyle, ColorScheme, TitleTemplates};
pub use preset::Preset;
