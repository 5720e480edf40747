//! Host services the terminal core invokes but does not own.
//!
//! A page host implements [`PageService`] over its document, a
//! [`PreferenceStore`] over whatever survives reloads, and optionally a
//! [`TimeService`]. In-memory implementations back the tests and the
//! headless app.

pub mod page;
pub mod prefs;
pub mod services;

pub use page::{MemoryPage, PageEffect};
pub use prefs::{FilePreferences, MemoryPreferences};
pub use services::{
    DesktopClock, LocalTime, PageService, PreferenceStore, Services, TimeService,
};

#[cfg(test)]
mod tests;
