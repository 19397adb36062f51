use log::debug;

use super::layout::{self, attr};
use crate::model::Cuisine;

/// Route the form navigates to on submit
pub const RESULTS_PATH: &str = "/recipes";

/// Partially filled search constraints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub cuisine: Option<Cuisine>,
    pub max_ready_time: Option<u64>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.cuisine.is_none() && self.max_ready_time.is_none()
    }

    /// Query-string pairs for the fields that are set, in form order
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(cuisine) = self.cuisine {
            pairs.push(("cuisine", cuisine.as_str().to_string()));
        }
        if let Some(minutes) = self.max_ready_time {
            pairs.push(("maxReadyTime", minutes.to_string()));
        }
        pairs
    }
}

/// Form controls, named as they are on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Query,
    Cuisine,
    MaxReadyTime,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Query => "query",
            Field::Cuisine => "cuisine",
            Field::MaxReadyTime => "maxReadyTime",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "query" => Some(Field::Query),
            "cuisine" => Some(Field::Cuisine),
            "maxReadyTime" => Some(Field::MaxReadyTime),
            _ => None,
        }
    }
}

/// The search form and its state.
///
/// Every change goes through [`SearchForm::update`]; callers re-render
/// explicitly afterwards.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    criteria: SearchCriteria,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild form state from submitted `name=value` pairs
    pub fn from_submission<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            match Field::from_name(name.as_ref()) {
                Some(field) => form.update(field, value.as_ref()),
                None => debug!("Ignoring unknown form field {}", name.as_ref()),
            }
        }
        form
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Set one field, leaving the others untouched.
    ///
    /// Empty input clears the field. A cuisine outside the offered set and a
    /// time that is not a non-negative integer count as empty, as the native
    /// controls would report them.
    pub fn update(&mut self, field: Field, value: &str) {
        match field {
            Field::Query => {
                self.criteria.query = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            Field::Cuisine => {
                self.criteria.cuisine = value.parse().ok();
            }
            Field::MaxReadyTime => {
                self.criteria.max_ready_time = value.trim().parse().ok();
            }
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.criteria.is_empty()
    }

    /// Navigation target for the current state, or `None` while submit is disabled
    pub fn submit(&self) -> Option<String> {
        if !self.submit_enabled() {
            return None;
        }

        let query = serde_urlencoded::to_string(self.criteria.to_pairs()).ok()?;
        Some(format!("{RESULTS_PATH}?{query}"))
    }

    pub fn render(&self) -> String {
        let criteria = &self.criteria;

        let query = criteria.query.as_deref().unwrap_or("");
        let minutes = criteria
            .max_ready_time
            .map(|m| m.to_string())
            .unwrap_or_default();

        let mut options = String::from(r#"<option value="">All cuisines</option>"#);
        for cuisine in Cuisine::ALL {
            let selected = if criteria.cuisine == Some(cuisine) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                cuisine.as_str(),
                cuisine.label()
            ));
        }

        let disabled = if self.submit_enabled() { "" } else { " disabled" };

        let body = format!(
            r#"<h1>Search recipes</h1>
<form method="post" action="/search" oninput="this.querySelector('button').disabled = !Array.from(this.elements).some(function (e) {{ return e.name && e.value; }})">
  <label for="query">Enter dish name</label>
  <input type="text" id="query" name="query" value="{query}" placeholder="sushi">
  <label for="cuisine">Choose cuisine</label>
  <select id="cuisine" name="cuisine">{options}</select>
  <label for="maxReadyTime">Maximum cooking time in minutes</label>
  <input type="number" id="maxReadyTime" name="maxReadyTime" value="{minutes}" min="0" placeholder="15">
  <button type="submit"{disabled}>Find recipes</button>
</form>"#,
            query = attr(query),
        );

        layout::page("Search recipes", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn button_disabled(html: &str) -> bool {
        let document = Html::parse_document(html);
        let button = Selector::parse("button[type=submit]").unwrap();
        document
            .select(&button)
            .next()
            .unwrap()
            .value()
            .attr("disabled")
            .is_some()
    }

    #[test]
    fn test_empty_form_cannot_submit() {
        let form = SearchForm::new();
        assert!(!form.submit_enabled());
        assert_eq!(form.submit(), None);
        assert!(button_disabled(&form.render()));
    }

    #[test]
    fn test_any_single_field_enables_submit() {
        let cases = [
            (Field::Query, "sushi"),
            (Field::Cuisine, "italian"),
            (Field::MaxReadyTime, "0"),
        ];
        for (field, value) in cases {
            let mut form = SearchForm::new();
            form.update(field, value);
            assert!(form.submit_enabled(), "{:?} should enable submit", field);
            assert!(!button_disabled(&form.render()));
        }
    }

    #[test]
    fn test_all_combinations_of_fields() {
        for mask in 0u8..8 {
            let mut form = SearchForm::new();
            if mask & 1 != 0 {
                form.update(Field::Query, "pasta");
            }
            if mask & 2 != 0 {
                form.update(Field::Cuisine, "french");
            }
            if mask & 4 != 0 {
                form.update(Field::MaxReadyTime, "30");
            }
            assert_eq!(form.submit_enabled(), mask != 0);
        }
    }

    #[test]
    fn test_update_merges() {
        let mut form = SearchForm::new();
        form.update(Field::Query, "tacos");
        form.update(Field::Cuisine, "mexican");
        form.update(Field::MaxReadyTime, "20");
        form.update(Field::Cuisine, "");

        assert_eq!(
            form.criteria(),
            &SearchCriteria {
                query: Some("tacos".to_string()),
                cuisine: None,
                max_ready_time: Some(20),
            }
        );
    }

    #[test]
    fn test_clearing_every_field_disables_submit_again() {
        let mut form = SearchForm::new();
        form.update(Field::Query, "soup");
        assert!(form.submit_enabled());
        form.update(Field::Query, "");
        assert!(!form.submit_enabled());
    }

    #[test]
    fn test_invalid_native_values_count_as_empty() {
        let mut form = SearchForm::new();
        form.update(Field::Cuisine, "martian");
        form.update(Field::MaxReadyTime, "-5");
        assert!(!form.submit_enabled());
    }

    #[test]
    fn test_large_ready_time_is_kept() {
        let form = SearchForm::from_submission([("maxReadyTime", "5000000000")]);
        assert!(form.submit_enabled());
        assert_eq!(form.submit().unwrap(), "/recipes?maxReadyTime=5000000000");
    }

    #[test]
    fn test_submit_omits_empty_fields() {
        let mut form = SearchForm::new();
        form.update(Field::Cuisine, "japanese");
        assert_eq!(form.submit().unwrap(), "/recipes?cuisine=japanese");

        form.update(Field::Query, "miso soup & rice");
        form.update(Field::MaxReadyTime, "15");
        assert_eq!(
            form.submit().unwrap(),
            "/recipes?query=miso+soup+%26+rice&cuisine=japanese&maxReadyTime=15"
        );
    }

    #[test]
    fn test_from_submission_ignores_unknown_and_empty() {
        let form = SearchForm::from_submission([
            ("query", ""),
            ("cuisine", "british"),
            ("maxReadyTime", ""),
            ("apiKey", "nope"),
        ]);
        assert_eq!(form.submit().unwrap(), "/recipes?cuisine=british");
    }

    #[test]
    fn test_render_keeps_state() {
        let mut form = SearchForm::new();
        form.update(Field::Query, r#""quoted""#);
        form.update(Field::Cuisine, "french");
        let document = Html::parse_document(&form.render());

        let input = Selector::parse("input#query").unwrap();
        let value = document.select(&input).next().unwrap().value().attr("value");
        assert_eq!(value, Some(r#""quoted""#));

        let selected = Selector::parse("option[selected]").unwrap();
        let option = document.select(&selected).next().unwrap();
        assert_eq!(option.value().attr("value"), Some("french"));

        let options = Selector::parse("select#cuisine option").unwrap();
        assert_eq!(document.select(&options).count(), 7);
    }
}
