use preference_store::KeyValueStore;
use todo_model::ThemeMode;

/// Key under which the appearance mode is persisted.
pub const THEME_KEY: &str = "theme";

/// Current appearance mode plus its persisted mirror.
///
/// The in-memory mode is authoritative. The backing store only mirrors it,
/// so failed reads fall back to `ThemeMode::Light` and failed writes are
/// logged and otherwise ignored.
pub struct PreferenceStore {
    mode: ThemeMode,
    store: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    /// Reads the persisted mode before returning, so the first frame already
    /// shows the saved theme.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let mut preference = Self::deferred(store);
        preference.load();
        preference
    }

    /// Starts at the default mode without touching the store. The host calls
    /// `load` once the first frame is on screen.
    pub fn deferred(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            mode: ThemeMode::default(),
            store,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn load(&mut self) -> ThemeMode {
        self.mode = Self::read_mode(self.store.as_ref());
        log::debug!("Loaded theme '{}'", self.mode);
        self.mode
    }

    /// Flips the mode and writes it through before returning.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        log::debug!("Theme switched to '{}'", self.mode);
        if let Err(err) = self.store.set(THEME_KEY, self.mode.as_str()) {
            log::warn!("Failed to persist theme '{}': {err}", self.mode);
        }
        self.mode
    }

    pub fn read_mode(store: &dyn KeyValueStore) -> ThemeMode {
        let raw = match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ThemeMode::default(),
            Err(err) => {
                log::warn!("Failed to read persisted theme: {err}");
                return ThemeMode::default();
            }
        };
        raw.parse().unwrap_or_else(|err| {
            log::warn!("Ignoring persisted theme: {err}");
            ThemeMode::default()
        })
    }
}
