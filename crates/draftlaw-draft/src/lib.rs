//! Resolution drafting and export.

pub mod drafter;
pub mod export;

pub use drafter::{DATE_PLACEHOLDER, draft_resolution, format_meeting_date};
pub use export::{ExportError, write_json, write_txt};
