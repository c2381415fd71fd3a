//! Bridge component between the Leptos UI and the imperative `canvas::Engine`.
//!
//! Mounts the `<canvas>`, creates the engine once the node exists, forwards
//! pointer events and toolbar commands to it, and acts on the returned
//! [`Action`](canvas::engine::Action)s. A window-level `pointerup` listener
//! ends drags released outside the canvas; it is removed when the component
//! is disposed.

use leptos::prelude::*;

use crate::components::status_line::StatusLine;
use crate::state::surface_view::SurfaceViewState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};

#[cfg(feature = "csr")]
use crate::util::{pointer::event_point, surface_config::page_config};

#[cfg(feature = "csr")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Repaint and log, never fail the handler.
#[cfg(feature = "csr")]
fn render(engine: &Engine) {
    if let Err(e) = engine.render() {
        leptos::logging::warn!("surface render failed: {e:?}");
    }
}

/// Apply engine actions: repaint, update the cursor and publish the view.
/// The engine logs its own state changes.
#[cfg(feature = "csr")]
fn process_actions(actions: Vec<Action>, engine: &Engine, surface: RwSignal<SurfaceViewState>) {
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::RenderNeeded => needs_render = true,
            Action::SetCursor(cursor) => {
                if let Err(e) = engine.set_cursor(&cursor) {
                    leptos::logging::warn!("cursor update failed: {e:?}");
                }
            }
            Action::PointCreated { .. }
            | Action::PointMoved { .. }
            | Action::SelectionChanged(_)
            | Action::DrawModeChanged(_)
            | Action::Cleared => {}
        }
    }
    if needs_render {
        render(engine);
        surface.set(SurfaceViewState::from_core(&engine.core));
    }
}

/// Run `f` against the engine if it has been created.
#[cfg(feature = "csr")]
fn with_engine(
    engine: &SharedEngine,
    surface: RwSignal<SurfaceViewState>,
    f: impl FnOnce(&mut Engine) -> Vec<Action>,
) {
    if let Some(engine) = engine.borrow_mut().as_mut() {
        let actions = f(engine);
        process_actions(actions, engine, surface);
    }
}

/// Drawing surface with its toolbar and status line.
#[component]
pub fn DrawingSurface() -> impl IntoView {
    let surface = expect_context::<RwSignal<SurfaceViewState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    // Create the engine once the canvas node is mounted.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let instance = Engine::new(canvas, page_config());
            render(&instance);
            surface.set(SurfaceViewState::from_core(&instance.core));
            *engine.borrow_mut() = Some(instance);
        });
    }

    // Releases outside the canvas still end the drag.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let handle = window_event_listener(leptos::ev::pointerup, move |_ev| {
            with_engine(&engine, surface, Engine::on_pointer_up);
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "csr")]
    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let pt = event_point(&ev);
            with_engine(&engine, surface, |e| e.on_pointer_down(pt));
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_pointer_down = |_ev: leptos::ev::PointerEvent| {};

    #[cfg(feature = "csr")]
    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let pt = event_point(&ev);
            with_engine(&engine, surface, |e| e.on_pointer_move(pt));
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_pointer_move = |_ev: leptos::ev::PointerEvent| {};

    #[cfg(feature = "csr")]
    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            with_engine(&engine, surface, Engine::on_pointer_up);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_pointer_up = |_ev: leptos::ev::PointerEvent| {};

    // The browser took the pointer over (scroll, gesture, lost capture).
    #[cfg(feature = "csr")]
    let on_pointer_cancel = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            with_engine(&engine, surface, Engine::on_pointer_cancel);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_pointer_cancel = |_ev: leptos::ev::PointerEvent| {};

    #[cfg(feature = "csr")]
    let on_toggle = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::MouseEvent| {
            with_engine(&engine, surface, Engine::toggle_draw_mode);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_toggle = |_ev: leptos::ev::MouseEvent| {};

    #[cfg(feature = "csr")]
    let on_clear = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::MouseEvent| {
            with_engine(&engine, surface, Engine::clear);
        }
    };
    #[cfg(not(feature = "csr"))]
    let on_clear = |_ev: leptos::ev::MouseEvent| {};

    let toggle_caption = move || surface.get().draw_mode_caption();

    view! {
        <section class="surface">
            <canvas
                class="surface__canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                "Your browser does not support canvas."
            </canvas>
            <div class="surface__toolbar">
                <button class="surface__button" title="Toggle Draw Mode" on:click=on_toggle>
                    {toggle_caption}
                </button>
                <button class="surface__button surface__button--danger" on:click=on_clear>
                    "Clear Lines"
                </button>
            </div>
            <StatusLine/>
        </section>
    }
}
