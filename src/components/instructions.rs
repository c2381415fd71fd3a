//! Static "How to draw a Triangle" panel shown beside the surface.

use leptos::prelude::*;

/// Steps as `(heading, detail)` pairs, in the order a learner follows them.
pub const STEPS: &[(&str, &str)] = &[
    (
        "Click on the canvas to create point A",
        "Click anywhere on the grid to place the first point, labelled \"A\".",
    ),
    (
        "Click again to draw segment AB",
        "A second click places point B and joins it to A. Drag either point to change the length.",
    ),
    (
        "Create point C",
        "A third click places point C. The triangle ABC closes and its three angles appear.",
    ),
    (
        "Adjust the angles",
        "Drag any corner to reshape the triangle. Lengths and angles update as you move.",
    ),
];

/// Instructions panel. Holds no state.
#[component]
pub fn Instructions() -> impl IntoView {
    view! {
        <section class="instructions">
            <p class="instructions__title">
                "How to draw a"
                <span class="instructions__accent">" Triangle:"</span>
            </p>
            <ol class="instructions__steps">
                {STEPS
                    .iter()
                    .map(|&(heading, detail)| {
                        view! {
                            <li class="instructions__step">
                                <strong>{heading}</strong>
                                <p>{detail}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[cfg(test)]
#[path = "instructions_test.rs"]
mod instructions_test;
