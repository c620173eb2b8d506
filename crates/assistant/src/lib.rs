//! Clients for the external language services the site depends on:
//! the generative-language provider behind the visitor chat widget and the
//! translation service behind the content auto-translation hook.
//!
//! Both calls run inline with the surrounding HTTP request. Chat failures
//! surface as typed errors the handler converts into an error payload;
//! translation failures are swallowed by [`autofill`], never propagated.

pub mod autofill;
pub mod chat;
pub mod context;
pub mod translate;

pub use autofill::{fill_missing_translations, FieldTriple};
pub use chat::{ChatApiError, GenerativeApi};
pub use context::SiteSnapshot;
pub use translate::TranslateApi;
