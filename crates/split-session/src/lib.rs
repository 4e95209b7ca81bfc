//! # split-session: Page-Session State for TipSplit
//!
//! Owns the one mutable thing in the system: the bill a page session is
//! building up between calculation requests. Everything else is a pure
//! call into `split-core`.
//!
//! ## Module Organization
//! ```text
//! split_session/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── state.rs        ◄─── BillState (Arc<Mutex<Bill>>) + operations
//! ├── response.rs     ◄─── Frontend DTOs (camelCase JSON)
//! └── error.rs        ◄─── ApiError (serialized to the frontend)
//! ```
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Building │────►│  Split   │────►│ Rendered │       │
//! │  │  Bill    │     │  (items, │     │ computed │     │  table   │       │
//! │  └──────────┘     │  people) │     └──────────┘     └──────────┘       │
//! │                   └──────────┘           │                              │
//! │                        ▲                 │ more edits                   │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  Nothing is persisted: close the page, the bill is gone.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod response;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use response::{BillResponse, SplitResponse};
pub use state::{BillState, NewItem, NewPerson};
