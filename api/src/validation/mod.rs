//! Checks run in the browser before anything is sent to the backend.

pub mod form;
pub mod match_sheet;

pub use form::FieldError;
pub use match_sheet::{MatchSheetDraft, MatchSheetError, MatchSheetSummary};
