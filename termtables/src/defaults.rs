//! Defaults applied to newly created tables.
//!
//! [`Defaults`] can be passed to [`Table::with_defaults`] directly. The free
//! functions in this module edit one process-wide instance that
//! [`Table::new`] copies at construction time; tables never read it again.
//!
//! [`Table::new`]: crate::Table::new
//! [`Table::with_defaults`]: crate::Table::with_defaults

use std::sync::{PoisonError, RwLock};

use crate::locale;
use crate::types::OutputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Defaults {
    /// Draw with box-drawing glyphs instead of ASCII.
    pub utf8_box: bool,
    pub mode: OutputMode,
}

impl Defaults {
    pub const fn new() -> Self {
        Self {
            utf8_box: false,
            mode: OutputMode::Terminal,
        }
    }

    pub const fn utf8_box(mut self, utf8_box: bool) -> Self {
        self.utf8_box = utf8_box;
        self
    }

    pub const fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }
}

static DEFAULTS: RwLock<Defaults> = RwLock::new(Defaults::new());

/// A copy of the process-wide defaults.
pub fn current() -> Defaults {
    *DEFAULTS.read().unwrap_or_else(PoisonError::into_inner)
}

fn update(f: impl FnOnce(&mut Defaults)) {
    let mut defaults = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut defaults);
}

/// Restores the compiled-in defaults.
pub fn reset() {
    update(|defaults| *defaults = Defaults::new());
}

pub fn enable_utf8() {
    update(|defaults| defaults.utf8_box = true);
}

/// Uses box-drawing glyphs only if the locale's charmap is UTF-8.
pub fn enable_utf8_per_locale() {
    let charmap = locale::charmap();
    let utf8 = locale::is_utf8(&charmap);
    log::debug!("locale charmap {charmap:?}, utf8 borders: {utf8}");
    update(|defaults| defaults.utf8_box = utf8);
}

/// Turning HTML off only has an effect while HTML is the default mode.
pub fn set_mode_html(on: bool) {
    set_mode(OutputMode::Html, on);
}

/// Turning Markdown off only has an effect while Markdown is the default mode.
pub fn set_mode_markdown(on: bool) {
    set_mode(OutputMode::Markdown, on);
}

fn set_mode(mode: OutputMode, on: bool) {
    update(|defaults| {
        if on {
            defaults.mode = mode;
        } else if defaults.mode == mode {
            defaults.mode = OutputMode::Terminal;
        }
    });
}
