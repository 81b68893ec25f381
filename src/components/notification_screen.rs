//! Notification Screen
//!
//! "Expiring soon" notices and recipe suggestions. Every card opens chat.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::navigation::Route;
use crate::notifications::{expiry_notices, today};
use crate::seed;

#[component]
pub fn NotificationScreen() -> impl IntoView {
    let ctx = use_app_context();
    let notices = expiry_notices(&seed::expiring_ingredients(), today());
    let recipes = seed::recipe_recommendations();

    view! {
        <div class="notification-screen">
            <section class="section">
                <h2 class="section-title">"Expiring Soon"</h2>
                {notices.into_iter().map(|notice| {
                    let color = notice.urgency.color();
                    let label = notice.label();
                    view! {
                        <div
                            class="ingredient-card"
                            on:click=move |_| ctx.push(Route::Chat { recipe: None })
                        >
                            <span class="alert-icon" style=format!("color: {}", color)>"●"</span>
                            <div class="ingredient-info">
                                <span class="ingredient-name">{notice.ingredient.name}</span>
                                <span style=format!("color: {}; font-weight: 500", color)>
                                    {label}
                                </span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </section>

            <section class="section">
                <h2 class="section-title">"Recommended Recipes"</h2>
                {recipes.into_iter().map(|recipe| {
                    let recipe_name = recipe.name.clone();
                    view! {
                        <div
                            class="recipe-card"
                            on:click=move |_| ctx.push(Route::Chat { recipe: Some(recipe_name.clone()) })
                        >
                            <div class="recipe-header">
                                <span class="recipe-name">{recipe.name}</span>
                                <span class="difficulty-tag">{recipe.difficulty.as_str()}</span>
                            </div>
                            <p class="ingredients-list">{format!("Uses: {}", recipe.ingredients.join(", "))}</p>
                            <p class="tap-prompt">"Tap to get the recipe →"</p>
                        </div>
                    }
                }).collect_view()}
            </section>
        </div>
    }
}
