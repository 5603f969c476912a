//! League Dashboard Test Utils
//!
//! Shared support for testing the `league-api` client without a backend. Requests go
//! through a scripted [`MockTransport`](transport::MockTransport) and session state
//! lives in a `MemoryStore`, so tests can both script replies and inspect what the
//! client sent and persisted.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder seeding tokens, the cached user, and scripted replies
//! - **TestContext**: the assembled client plus handles on its transport and store
//! - **MockTransport**: records every request and answers from a per-route script
//! - **fixture**: in-memory DTOs with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use league_api::http::Method;
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn loads_teams() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_auth_token("access")
//!         .with_json(Method::Get, "/teams", &vec![fixture::team::dto()])
//!         .build()?;
//!
//!     let teams = test.client.teams().get_all(&Default::default()).await?;
//!     assert_eq!(teams.len(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod transport;
