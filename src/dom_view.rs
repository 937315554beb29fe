use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, PointerEvent, WheelEvent};

use hamekomi_core::{EngineAction, EngineSnapshot};

use crate::app_core::AppCore;
use crate::input::{screen_to_container_coords, wheel_spin_direction};
use crate::runtime::{GameView, ViewHooks};

pub(crate) struct DomViewAdapter {
    core: Rc<AppCore>,
    container: HtmlElement,
    pieces: Vec<HtmlElement>,
    listeners: Vec<EventListener>,
    hooks: Option<ViewHooks>,
}

fn fmt_f32(value: f32) -> String {
    format!("{:.3}", value)
}

impl DomViewAdapter {
    pub(crate) fn new(
        core: Rc<AppCore>,
        container: HtmlElement,
        pieces: Vec<HtmlElement>,
    ) -> Self {
        Self {
            core,
            container,
            pieces,
            listeners: Vec::new(),
            hooks: None,
        }
    }

    fn install_listeners(&mut self) {
        let Some(hooks) = self.hooks.clone() else {
            return;
        };
        for (piece_id, piece) in self.pieces.iter().enumerate() {
            let core = self.core.clone();
            let container = self.container.clone();
            let on_action = hooks.on_action.clone();
            let target = piece.clone();
            let listener = EventListener::new(piece, "pointerdown", move |event: &Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let snapshot = core.snapshot();
                if snapshot
                    .pieces
                    .get(piece_id)
                    .map(|piece| piece.locked)
                    .unwrap_or(true)
                {
                    return;
                }
                let Some((x, y)) = screen_to_container_coords(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    &container,
                ) else {
                    return;
                };
                let _ = target.set_pointer_capture(event.pointer_id());
                on_action(EngineAction::BeginDrag {
                    piece_id,
                    x,
                    y,
                    pointer_id: Some(event.pointer_id()),
                });
            });
            self.listeners.push(listener);

            let container = self.container.clone();
            let on_action = hooks.on_action.clone();
            let listener = EventListener::new(piece, "pointermove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let Some((x, y)) = screen_to_container_coords(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    &container,
                ) else {
                    return;
                };
                on_action(EngineAction::DragMove {
                    x,
                    y,
                    pointer_id: Some(event.pointer_id()),
                });
            });
            self.listeners.push(listener);

            let on_action = hooks.on_action.clone();
            let listener = EventListener::new(piece, "pointerup", move |event: &Event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                on_action(EngineAction::DragEnd {
                    pointer_id: Some(event.pointer_id()),
                });
            });
            self.listeners.push(listener);
        }

        let core = self.core.clone();
        let on_action = hooks.on_action.clone();
        let listener = EventListener::new_with_options(
            &self.container,
            "wheel",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                // Only an actively dragged piece spins; otherwise the page scrolls.
                if core.snapshot().active_id.is_none() {
                    return;
                }
                event.prevent_default();
                on_action(EngineAction::Rotate {
                    direction: wheel_spin_direction(event),
                });
            },
        );
        self.listeners.push(listener);
    }
}

impl GameView for DomViewAdapter {
    fn init(&mut self, hooks: ViewHooks) {
        self.hooks = Some(hooks);
        self.install_listeners();
    }

    fn render(&mut self, snapshot: &EngineSnapshot) {
        for (piece_id, el) in self.pieces.iter().enumerate() {
            let Some(piece) = snapshot.pieces.get(piece_id) else {
                continue;
            };
            let style = format!(
                "left: {}px; top: {}px; transform: rotate({}deg);",
                fmt_f32(piece.pos.0),
                fmt_f32(piece.pos.1),
                fmt_f32(piece.rot_deg)
            );
            let _ = el.set_attribute("style", &style);
            let classes = el.class_list();
            let _ = classes.toggle_with_force("is-selected", piece.selected);
            let _ = classes.toggle_with_force("is-dragging", piece.dragging);
            let _ = classes.toggle_with_force("is-locked", piece.locked);
        }
        let _ = self
            .container
            .class_list()
            .toggle_with_force("is-complete", snapshot.complete);
    }
}
