use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One row of a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    /// Some results come without an image
    #[serde(default)]
    pub image: String,
}

/// Body of `/recipes/complexSearch`; fields beyond `results` are ignored
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RecipeSummary>,
}

/// Body of `/recipes/{id}/information`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Not always echoed back by the API
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub ready_in_minutes: i64,
    pub servings: i64,
    pub extended_ingredients: Vec<Ingredient>,
}

/// A single ingredient line. Ids may repeat within one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub original: String,
}

impl Ingredient {
    /// Key that stays unique even when ingredient ids repeat
    pub fn display_key(&self, index: usize) -> String {
        format!("{}-{}", self.id, index)
    }
}

/// The cuisines offered by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    American,
    British,
    Italian,
    Mexican,
    French,
    Japanese,
}

impl Cuisine {
    pub const ALL: [Cuisine; 6] = [
        Cuisine::American,
        Cuisine::British,
        Cuisine::Italian,
        Cuisine::Mexican,
        Cuisine::French,
        Cuisine::Japanese,
    ];

    /// Value sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::American => "american",
            Cuisine::British => "british",
            Cuisine::Italian => "italian",
            Cuisine::Mexican => "mexican",
            Cuisine::French => "french",
            Cuisine::Japanese => "japanese",
        }
    }

    /// Label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            Cuisine::American => "American",
            Cuisine::British => "British",
            Cuisine::Italian => "Italian",
            Cuisine::Mexican => "Mexican",
            Cuisine::French => "French",
            Cuisine::Japanese => "Japanese",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cuisine: {0}")]
pub struct UnknownCuisine(pub String);

impl FromStr for Cuisine {
    type Err = UnknownCuisine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuisine::ALL
            .into_iter()
            .find(|cuisine| cuisine.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCuisine(s.to_string()))
    }
}
