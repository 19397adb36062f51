//! Recipe search over the Spoonacular API, rendered on the server.
//!
//! Three pages: a search form at `/`, results at `/recipes`, and one
//! recipe at `/recipes/{id}`. State travels only in URLs.
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod upstream;
pub mod views;
pub mod web;

pub use cache::CachedUpstream;
pub use crate::config::{load_config, ApiKey, ServerConfig};
pub use error::{AppError, UpstreamError};
pub use model::{Cuisine, Ingredient, RecipeDetail, RecipeSummary};
pub use upstream::{Request, SpoonacularClient, Upstream};
pub use views::{SearchCriteria, SearchForm, SearchOutcome, SearchParams};
pub use web::{router, serve, AppState};
