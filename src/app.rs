//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{drawing_surface::DrawingSurface, instructions::Instructions};
use crate::state::surface_view::SurfaceViewState;

/// Root application component.
///
/// Provides the surface view context and lays out the heading, the
/// instructions panel and the drawing surface.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let surface_view = RwSignal::new(SurfaceViewState::default());
    provide_context(surface_view);

    view! {
        <Title text="Figures"/>

        <main class="page">
            <h1 class="page__title">
                <span class="page__welcome">"Welcome,"</span>
                " lets learn to draw figures"
            </h1>
            <div class="page__body">
                <Instructions/>
                <DrawingSurface/>
            </div>
        </main>
    }
}
