use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use hamekomi_core::{scene_by_slug, PieceInit, PlacementEngine, DEFAULT_SCENE_SLUG};

use crate::app_core::AppCore;
use crate::boot;
use crate::dom_view::DomViewAdapter;
use crate::input::parse_rotation_attr;
use crate::runtime::{GameView, ViewHooks};

pub(crate) const PLAYGROUND_ID: &str = "playground";

thread_local! {
    static APP_CORE: RefCell<Option<Rc<AppCore>>> = RefCell::new(None);
    static DOM_VIEW: RefCell<Option<DomViewAdapter>> = RefCell::new(None);
    static STATE_DUMP: RefCell<Option<Closure<dyn Fn() -> JsValue>>> = RefCell::new(None);
}

pub(crate) fn start() -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no document".to_string())?;
    let container = document
        .get_element_by_id(PLAYGROUND_ID)
        .ok_or_else(|| format!("missing #{} container", PLAYGROUND_ID))?;
    let container: HtmlElement = container
        .dyn_into()
        .map_err(|_| format!("#{} is not an html element", PLAYGROUND_ID))?;
    let scene = scene_by_slug(DEFAULT_SCENE_SLUG).ok_or_else(|| "unknown scene".to_string())?;

    boot::set_phase("measure", scene.label);
    let container_size = (
        container.client_width() as f32,
        container.client_height() as f32,
    );
    let mut elements = Vec::with_capacity(scene.pieces.len());
    let mut inits = Vec::with_capacity(scene.pieces.len());
    for spec in scene.pieces {
        let selector = format!(".piece[data-id=\"{}\"]", spec.id);
        let element = document
            .query_selector(&selector)
            .ok()
            .flatten()
            .ok_or_else(|| format!("missing piece element: {}", spec.id))?;
        let element: HtmlElement = element
            .dyn_into()
            .map_err(|_| format!("piece {} is not an html element", spec.id))?;
        let rot_deg = parse_rotation_attr(
            element.get_attribute("data-r"),
            spec.initial_rotation_deg,
        );
        inits.push(PieceInit {
            pos: (element.offset_left() as f32, element.offset_top() as f32),
            size: (
                element.offset_width() as f32,
                element.offset_height() as f32,
            ),
            rot_deg,
        });
        elements.push(element);
    }

    let engine = PlacementEngine::new(scene, container_size, inits)?;
    let core = AppCore::new(engine);

    boot::set_phase("view", "dom adapter");
    let mut adapter = DomViewAdapter::new(core.clone(), container, elements);
    let core_for_hooks = core.clone();
    adapter.init(ViewHooks {
        on_action: Rc::new(move |action| core_for_hooks.apply_action(action)),
    });
    DOM_VIEW.with(|slot| {
        *slot.borrow_mut() = Some(adapter);
    });

    let core_for_render = core.clone();
    core.subscribe(Rc::new(move || {
        let snapshot = core_for_render.snapshot();
        DOM_VIEW.with(|slot| {
            if let Some(adapter) = slot.borrow_mut().as_mut() {
                adapter.render(&snapshot);
            }
        });
    }));

    let snapshot = core.snapshot();
    DOM_VIEW.with(|slot| {
        if let Some(adapter) = slot.borrow_mut().as_mut() {
            adapter.render(&snapshot);
        }
    });

    install_state_dump(&core);
    APP_CORE.with(|slot| {
        *slot.borrow_mut() = Some(core);
    });
    Ok(())
}

fn install_state_dump(core: &Rc<AppCore>) {
    let core = core.clone();
    let closure = Closure::wrap(Box::new(move || {
        let snapshot = core.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => JsValue::from_str(&json),
            Err(error) => {
                gloo::console::warn!(format!("state dump failed: {}", error));
                JsValue::NULL
            }
        }
    }) as Box<dyn Fn() -> JsValue>);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("hamekomiState"),
            closure.as_ref(),
        );
    }
    STATE_DUMP.with(|slot| {
        *slot.borrow_mut() = Some(closure);
    });
}
