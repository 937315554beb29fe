use std::cell::RefCell;
use std::rc::Rc;

use hamekomi_core::{DropOutcome, EngineAction, EngineSnapshot, PlacementEngine};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

pub(crate) struct AppCore {
    engine: RefCell<PlacementEngine>,
    subscribers: RefCell<Vec<AppSubscriber>>,
}

impl AppCore {
    pub(crate) fn new(engine: PlacementEngine) -> Rc<Self> {
        Rc::new(Self {
            engine: RefCell::new(engine),
            subscribers: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) {
        self.subscribers.borrow_mut().push(subscriber);
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber();
        }
    }

    pub(crate) fn snapshot(&self) -> EngineSnapshot {
        self.engine.borrow().snapshot()
    }

    pub(crate) fn apply_action(&self, action: EngineAction) {
        {
            let mut engine = self.engine.borrow_mut();
            match action {
                EngineAction::BeginDrag {
                    piece_id,
                    x,
                    y,
                    pointer_id,
                } => engine.begin_drag(piece_id, x, y, pointer_id),
                EngineAction::DragMove { x, y, pointer_id } => engine.drag_move(x, y, pointer_id),
                EngineAction::Rotate { direction } => engine.rotate(direction),
                EngineAction::DragEnd { pointer_id } => {
                    let before = engine.snapshot();
                    let outcome = engine.drag_end(pointer_id);
                    let dropped = before
                        .active_id
                        .and_then(|idx| before.pieces.get(idx))
                        .map(|piece| piece.id.clone())
                        .unwrap_or_default();
                    match outcome {
                        DropOutcome::Locked => {
                            gloo::console::log!("piece locked:", dropped.as_str());
                            if engine.is_complete() && !before.complete {
                                gloo::console::log!("assembly complete");
                            }
                        }
                        DropOutcome::OutsideBounds => {
                            gloo::console::warn!(
                                "anchor dropped with its center outside the container:",
                                dropped.as_str()
                            );
                        }
                        DropOutcome::Released | DropOutcome::NoDrag => {}
                    }
                }
            }
        }
        self.notify();
    }
}
