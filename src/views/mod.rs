//! Server-rendered pages.
//!
//! Each view computes its state once per request and renders it to an HTML
//! string. Nothing is shared between views beyond what travels in the URL.
pub mod detail;
pub mod layout;
pub mod results;
pub mod search_form;

pub use results::{SearchOutcome, SearchParams};
pub use search_form::{Field, SearchCriteria, SearchForm};
