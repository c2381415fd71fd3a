//! Status line under the surface: draw mode, point count and drag target.

use leptos::prelude::*;

use crate::state::surface_view::SurfaceViewState;

#[component]
pub fn StatusLine() -> impl IntoView {
    let surface = expect_context::<RwSignal<SurfaceViewState>>();

    let mode_class = move || {
        if surface.get().draw_mode {
            "status-line__dot status-line__dot--drawing"
        } else {
            "status-line__dot status-line__dot--locked"
        }
    };
    let mode_label = move || if surface.get().draw_mode { "Drawing" } else { "Locked" };

    view! {
        <div class="status-line">
            <span class="status-line__mode">
                <span class=mode_class></span>
                {mode_label}
            </span>
            <span class="status-line__divider">"|"</span>
            <span class="status-line__summary">{move || surface.get().summary()}</span>
        </div>
    }
}
