pub mod config;
pub mod items;
pub mod preference;
pub mod session;
pub mod validation;

pub use config::{ConfigError, PreferenceLoad, PreferencesConfig, TodoConfig};
pub use items::{EditSlot, ItemListStore};
pub use preference::{PreferenceStore, THEME_KEY};
pub use session::{TodoSession, TodoSnapshot};
pub use todo_model::{Item, ItemId, ThemeMode};
