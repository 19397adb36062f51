use log::{debug, error};

use super::layout::{self, attr, text};
use crate::error::UpstreamError;
use crate::model::{RecipeSummary, SearchResponse};
use crate::upstream::{Request, Upstream};

/// Parameters of the results route, passed through to the API as given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub max_ready_time: Option<String>,
}

impl SearchParams {
    /// Collect the route's query pairs. Unknown names are ignored; for a
    /// repeated name the first non-empty value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "query" => &mut params.query,
                "cuisine" => &mut params.cuisine,
                "maxReadyTime" => &mut params.max_ready_time,
                _ => continue,
            };
            if slot.as_deref().map_or(true, str::is_empty) {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Upstream search request carrying only the parameters that have a value
    pub fn to_request(&self) -> Request {
        let fields = [
            ("query", &self.query),
            ("cuisine", &self.cuisine),
            ("maxReadyTime", &self.max_ready_time),
        ];

        fields
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (name, v))
            })
            .fold(Request::complex_search(), |request, (name, value)| {
                request.param(name, value)
            })
    }
}

/// What a results page shows; computed once per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Error,
    Empty,
    Populated(Vec<RecipeSummary>),
}

impl SearchOutcome {
    fn from_results(results: Vec<RecipeSummary>) -> Self {
        if results.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Populated(results)
        }
    }
}

async fn fetch(upstream: &dyn Upstream, params: &SearchParams) -> Result<Vec<RecipeSummary>, UpstreamError> {
    let body = upstream.get(&params.to_request()).await?;
    let response: SearchResponse = serde_json::from_value(body)?;
    Ok(response.results)
}

/// Run the search. Failures never escape: they become [`SearchOutcome::Error`].
pub async fn search(upstream: &dyn Upstream, params: &SearchParams) -> SearchOutcome {
    match fetch(upstream, params).await {
        Ok(results) => {
            debug!("Search returned {} results", results.len());
            SearchOutcome::from_results(results)
        }
        Err(e) => {
            error!("API Error: {}", e);
            SearchOutcome::Error
        }
    }
}

/// Link target of a result card
pub fn detail_href(id: i64) -> String {
    format!("/recipes/{id}")
}

fn panel(class: &str, heading: &str, message: &str) -> String {
    format!(
        r#"<div class="panel {class}">
  <h2>{}</h2>
  <p>{}</p>
  {}
</div>"#,
        text(heading),
        text(message),
        layout::back_to_search("Back to Search"),
    )
}

fn card(recipe: &RecipeSummary) -> String {
    format!(
        r#"<a class="recipe-card" href="{href}">
  <img src="{src}" alt="{alt}">
  <h2>{title}</h2>
</a>"#,
        href = attr(&detail_href(recipe.id)),
        src = attr(&recipe.image),
        alt = attr(&recipe.title),
        title = text(&recipe.title),
    )
}

pub fn render(outcome: &SearchOutcome) -> String {
    let content = match outcome {
        SearchOutcome::Error => panel("error", "ERROR", "Unexpected error happened."),
        SearchOutcome::Empty => panel("empty", "No recipes found", "Change your search criteria"),
        SearchOutcome::Populated(recipes) => {
            let cards: Vec<String> = recipes.iter().map(card).collect();
            format!("<div class=\"grid\">\n{}\n</div>", cards.join("\n"))
        }
    };

    layout::page(
        "Found recipes",
        &format!("<h1>Found recipes</h1>\n{content}"),
    )
}
