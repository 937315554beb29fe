use serde::{Deserialize, Serialize};

use crate::game::{
    ROTATION_STEP_DEFAULT_DEG, ROTATION_TOLERANCE_DEFAULT_DEG, SNAP_DISTANCE_DEFAULT_PX,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    pub snap_distance_px: f32,
    pub rotation_tolerance_deg: f32,
    pub rotation_step_deg: f32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            snap_distance_px: SNAP_DISTANCE_DEFAULT_PX,
            rotation_tolerance_deg: ROTATION_TOLERANCE_DEFAULT_DEG,
            rotation_step_deg: ROTATION_STEP_DEFAULT_DEG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub id: String,
    pub pos: (f32, f32),
    pub size: (f32, f32),
    pub rot_deg: f32,
    pub selected: bool,
    pub dragging: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub scene: String,
    pub container: (f32, f32),
    pub rules: GameRules,
    pub pieces: Vec<PieceSnapshot>,
    pub active_id: Option<usize>,
    pub selected_id: Option<usize>,
    pub complete: bool,
}
