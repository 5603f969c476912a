//! Test fixtures providing reusable DTOs.
//!
//! Each module exposes `DEFAULT_*` constants and constructors returning a DTO filled
//! with those defaults. Override fields with struct update syntax:
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let team = TeamDto {
//!     name: Some("Blue Sharks".to_string()),
//!     ..fixture::team::dto()
//! };
//! ```

pub mod competition;
pub mod match_sheet;
pub mod matches;
pub mod message;
pub mod notification;
pub mod team;
pub mod user;
