//! Service traits and the desktop clock.

use folio_types::error::Result;

// ---------------------------------------------------------------------------
// Page service
// ---------------------------------------------------------------------------

/// Effects on the host page, addressed by element identifier.
///
/// Every method that names an element fails with
/// [`FolioError::MissingElement`](folio_types::error::FolioError::MissingElement)
/// when the page has no such element.
pub trait PageService {
    /// Scroll the element into view.
    fn scroll_to(&mut self, id: &str) -> Result<()>;

    /// Scroll the whole page to the top.
    fn scroll_to_top(&mut self) -> Result<()>;

    /// Scroll a container so its newest content is visible.
    fn scroll_to_end(&mut self, id: &str) -> Result<()>;

    /// Move input focus to the element.
    fn focus(&mut self, id: &str) -> Result<()>;

    /// Show or hide the element.
    fn set_display(&mut self, id: &str, visible: bool) -> Result<()>;

    /// Current visibility, or `None` if it was never set explicitly.
    fn display_state(&self, id: &str) -> Result<Option<bool>>;

    /// Replace the element's text content.
    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;

    /// Append to the element's text content.
    fn append_text(&mut self, id: &str, text: &str) -> Result<()>;

    /// Read the element's text content.
    fn text(&self, id: &str) -> Result<String>;

    /// Apply a named theme; `None` restores the page's built-in look.
    fn set_theme(&mut self, name: Option<&str>) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Preference store
// ---------------------------------------------------------------------------

/// Key-value preferences that survive page reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A broken-down wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl LocalTime {
    /// `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `HH:MM:SS`.
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date_string(), self.time_string())
    }
}

/// Source of the current wall-clock time.
pub trait TimeService {
    fn now(&self) -> Result<LocalTime>;
}

/// Clock backed by `std::time::SystemTime` with a fixed UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopClock {
    utc_offset_secs: i64,
}

impl DesktopClock {
    /// A UTC clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock shifted by a fixed offset from UTC.
    pub fn with_offset(utc_offset_secs: i64) -> Self {
        Self { utc_offset_secs }
    }

    /// Break a Unix timestamp into calendar fields.
    pub fn breakdown(unix_secs: i64) -> LocalTime {
        let secs = unix_secs.max(0) as u64;
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let (year, month, day) = days_to_ymd(days);
        LocalTime {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
        }
    }
}

impl TimeService for DesktopClock {
    fn now(&self) -> Result<LocalTime> {
        use std::time::SystemTime;
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;
        Ok(Self::breakdown(secs + self.utc_offset_secs))
    }
}

// ---------------------------------------------------------------------------
// Service bundle
// ---------------------------------------------------------------------------

/// Borrowed host services handed to the terminal for one operation.
pub struct Services<'a> {
    pub page: &'a mut dyn PageService,
    pub prefs: &'a mut dyn PreferenceStore,
    /// `None` on hosts without a clock; `time`/`date` then fail politely.
    pub time: Option<&'a dyn TimeService>,
}

impl<'a> Services<'a> {
    pub fn new(
        page: &'a mut dyn PageService,
        prefs: &'a mut dyn PreferenceStore,
        time: Option<&'a dyn TimeService>,
    ) -> Self {
        Self { page, prefs, time }
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let feb = if is_leap(year) { 29 } else { 28 };
    let month_days: [u64; 12] = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut month = 12u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    (year, month, (days + 1) as u8)
}

pub(crate) fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}
