// SPDX-License-Identifier: MPL-2.0
//! Localization of package text.
//!
//! Each content package ships one spreadsheet document per language. A
//! [`LocalizationSession`] scans those documents, resolves the language the
//! host asks for (falling back to the package default), and serves text
//! through [`LocalizationSession::get_text`].
//!
//! # Features
//!
//! - Flat OpenDocument spreadsheet parsing ([`fods`])
//! - Fallback to the package default when a document is missing or corrupt
//! - Runtime language switching with change notifications
//! - A [`SessionRegistry`] that fans host lifecycle signals out to sessions

pub mod events;
pub mod fods;
pub mod generator;
pub mod locale;
pub mod registry;
pub mod session;
pub mod table;

pub use events::{SessionEvent, SubscriptionHandle};
pub use generator::LocalizationTableGenerator;
pub use locale::resolve_requested_language;
pub use registry::{SessionId, SessionRegistry};
pub use session::LocalizationSession;
pub use table::{LocalizationEntry, LocalizationLookupTable};
