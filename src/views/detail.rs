use super::layout::{self, attr, text};
use crate::error::UpstreamError;
use crate::model::RecipeDetail;
use crate::upstream::{Request, Upstream};

/// Fetch one recipe. Unlike the search, failures propagate to the caller.
pub async fn load(upstream: &dyn Upstream, id: &str) -> Result<RecipeDetail, UpstreamError> {
    let body = upstream.get(&Request::information(id)).await?;
    Ok(serde_json::from_value(body)?)
}

pub fn render(recipe: &RecipeDetail) -> String {
    let ingredients: Vec<String> = recipe
        .extended_ingredients
        .iter()
        .enumerate()
        .map(|(index, ingredient)| {
            format!(
                r#"<li data-key="{}">{}</li>"#,
                attr(&ingredient.display_key(index)),
                text(&ingredient.original)
            )
        })
        .collect();

    let body = format!(
        r#"<article class="recipe">
  <div class="hero">
    <img src="{src}" alt="{alt}">
    <h1>{title}</h1>
  </div>
  <div class="summary">
    <div>
      <p>Preparation Time</p>
      <p class="ready-in">{minutes} mins</p>
    </div>
    <div>
      <p>Servings</p>
      <p class="servings">{servings}</p>
    </div>
  </div>
  <h2>Ingredients</h2>
  <ul class="ingredients">
{ingredients}
  </ul>
  {back}
</article>"#,
        src = attr(&recipe.image),
        alt = attr(&recipe.title),
        title = text(&recipe.title),
        minutes = recipe.ready_in_minutes,
        servings = recipe.servings,
        ingredients = ingredients.join("\n"),
        back = layout::back_to_search("Back to search"),
    );

    layout::page(&recipe.title, &body)
}
