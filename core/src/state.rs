use crate::snapshot::GameRules;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceState {
    pub pos: (f32, f32),
    pub size: (f32, f32),
    pub rot_deg: f32,
    pub locked: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct DragState {
    pub piece_id: usize,
    pub start: (f32, f32),
    pub base_pos: (f32, f32),
    pub pointer_id: Option<i32>,
}

#[derive(Clone, Debug)]
pub struct CoreState {
    pub container: (f32, f32),
    pub pieces: Vec<PieceState>,
    pub drag: Option<DragState>,
    pub selected: Option<usize>,
    pub complete: bool,
    pub rules: GameRules,
}

impl CoreState {
    pub fn new(container: (f32, f32), rules: GameRules) -> Self {
        Self {
            container,
            pieces: Vec::new(),
            drag: None,
            selected: None,
            complete: false,
            rules,
        }
    }
}
