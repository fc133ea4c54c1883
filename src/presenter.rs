//! Rendering of notes for the terminal

use std::io;
use std::io::Write;

use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::format::Item;
use chrono::format::StrftimeItems;
use chrono_tz::Tz;

use crate::notes::Note;

/// Time zone used when none is configured
pub const DEFAULT_TIME_ZONE: &str = "Asia/Novosibirsk";

/// Timestamp format used when none is configured, `DD.MM.YYYY HH:MM`
pub const DEFAULT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// What to include when rendering notes
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Include the text of every note
    pub show_text: bool,

    /// Finish with the number of rendered notes
    pub show_total: bool,
}

/// Renders notes with timestamps in a fixed time zone
#[derive(Clone, Debug)]
pub struct Presenter {
    time_zone: Tz,
    time_format: String,
}

impl Presenter {
    /// Create a presenter for the named time zone and `strftime` format
    ///
    /// Fails for unknown time zones and invalid formats
    pub fn new(time_zone: &str, time_format: &str) -> Result<Self, String> {
        let time_zone = time_zone
            .parse::<Tz>()
            .map_err(|err| format!("unknown time zone `{time_zone}`: {err}"))?;

        if StrftimeItems::new(time_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("invalid time format `{time_format}`"));
        }

        Ok(Self {
            time_zone,
            time_format: time_format.to_string(),
        })
    }

    /// Format a UTC timestamp in the configured time zone
    pub fn format_timestamp(&self, timestamp: &NaiveDateTime) -> String {
        self.time_zone
            .from_utc_datetime(timestamp)
            .format(&self.time_format)
            .to_string()
    }

    /// Write the notes to `out`
    ///
    /// Every note gets a trailing blank line, unless there is only one
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        notes: &[Note],
        options: RenderOptions,
    ) -> io::Result<()> {
        for note in notes {
            writeln!(out, "Note: {}", note.id)?;
            writeln!(out, "Title: {}", note.title)?;
            writeln!(out, "Created: {}", self.format_timestamp(&note.created_at))?;

            if note.is_modified() {
                writeln!(out, "Modified: {}", self.format_timestamp(&note.updated_at))?;
            }

            if options.show_text {
                writeln!(out, "Text:")?;
                writeln!(out, "{}", note.body)?;
            }

            if notes.len() != 1 {
                writeln!(out)?;
            }
        }

        if options.show_total {
            writeln!(out, "Total notes: {}", notes.len())?;
        }

        Ok(())
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self {
            time_zone: chrono_tz::Asia::Novosibirsk,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}
