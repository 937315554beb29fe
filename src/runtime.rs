use std::rc::Rc;

use hamekomi_core::{EngineAction, EngineSnapshot};

#[derive(Clone)]
pub(crate) struct ViewHooks {
    pub on_action: Rc<dyn Fn(EngineAction)>,
}

pub(crate) trait GameView {
    fn init(&mut self, hooks: ViewHooks);
    fn render(&mut self, snapshot: &EngineSnapshot);
}
