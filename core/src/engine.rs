use crate::action::SpinDirection;
use crate::game::{
    angle_matches, center_inside, center_of, clamp_to_container, distance, pos_for_center,
    ROTATION_STEP_MAX_DEG, ROTATION_STEP_MIN_DEG, ROTATION_TOLERANCE_MAX_DEG,
    ROTATION_TOLERANCE_MIN_DEG, SNAP_DISTANCE_MAX_PX, SNAP_DISTANCE_MIN_PX,
};
use crate::scene::{piece_index, validate_scene, SceneSpec};
use crate::snapshot::{EngineSnapshot, GameRules, PieceSnapshot};
use crate::state::{CoreState, DragState, PieceState};

#[derive(Clone, Copy, Debug)]
pub struct PieceInit {
    pub pos: (f32, f32),
    pub size: (f32, f32),
    pub rot_deg: f32,
}

#[derive(Clone, Copy, Debug)]
struct ResolvedTarget {
    anchor: usize,
    offset: (f32, f32),
    rot_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    NoDrag,
    Released,
    OutsideBounds,
    Locked,
}

pub struct PlacementEngine {
    scene: &'static SceneSpec,
    targets: Vec<Option<ResolvedTarget>>,
    state: CoreState,
}

impl PlacementEngine {
    pub fn new(
        scene: &'static SceneSpec,
        container: (f32, f32),
        pieces: Vec<PieceInit>,
    ) -> Result<Self, String> {
        validate_scene(scene)?;
        if container.0 <= 0.0 || container.1 <= 0.0 {
            return Err("container has no size".to_string());
        }
        if pieces.len() != scene.pieces.len() {
            return Err(format!(
                "scene {} expects {} pieces, got {}",
                scene.slug,
                scene.pieces.len(),
                pieces.len()
            ));
        }
        let mut targets = Vec::with_capacity(scene.pieces.len());
        for spec in scene.pieces {
            let target = match &spec.rule {
                None => None,
                Some(rule) => {
                    let anchor = piece_index(scene, rule.anchor)
                        .ok_or_else(|| format!("unknown anchor {}", rule.anchor))?;
                    Some(ResolvedTarget {
                        anchor,
                        offset: (rule.dx, rule.dy),
                        rot_deg: rule.rot_deg,
                    })
                }
            };
            targets.push(target);
        }
        let mut state = CoreState::new(container, GameRules::default());
        state.pieces = pieces
            .iter()
            .map(|init| PieceState {
                pos: clamp_to_container(init.pos, init.size, container),
                size: init.size,
                rot_deg: init.rot_deg,
                locked: false,
            })
            .collect();
        Ok(Self {
            scene,
            targets,
            state,
        })
    }

    pub fn scene(&self) -> &'static SceneSpec {
        self.scene
    }

    pub fn rules(&self) -> GameRules {
        self.state.rules
    }

    pub fn set_snap_distance(&mut self, value: f32) {
        self.state.rules.snap_distance_px = value.clamp(SNAP_DISTANCE_MIN_PX, SNAP_DISTANCE_MAX_PX);
    }

    pub fn set_rotation_tolerance(&mut self, value: f32) {
        self.state.rules.rotation_tolerance_deg =
            value.clamp(ROTATION_TOLERANCE_MIN_DEG, ROTATION_TOLERANCE_MAX_DEG);
    }

    pub fn set_rotation_step(&mut self, value: f32) {
        self.state.rules.rotation_step_deg =
            value.clamp(ROTATION_STEP_MIN_DEG, ROTATION_STEP_MAX_DEG);
    }

    pub fn piece_index(&self, id: &str) -> Option<usize> {
        piece_index(self.scene, id)
    }

    pub fn begin_drag(&mut self, piece_id: usize, x: f32, y: f32, pointer_id: Option<i32>) {
        if self.state.drag.is_some() {
            return;
        }
        let Some(piece) = self.state.pieces.get(piece_id) else {
            return;
        };
        if piece.locked {
            return;
        }
        self.state.drag = Some(DragState {
            piece_id,
            start: (x, y),
            base_pos: piece.pos,
            pointer_id,
        });
        self.state.selected = Some(piece_id);
    }

    pub fn drag_move(&mut self, x: f32, y: f32, pointer_id: Option<i32>) {
        let Some(drag) = self.state.drag else {
            return;
        };
        if drag.pointer_id.is_some() && pointer_id.is_some() && drag.pointer_id != pointer_id {
            return;
        }
        let container = self.state.container;
        let Some(piece) = self.state.pieces.get_mut(drag.piece_id) else {
            return;
        };
        let next = (
            drag.base_pos.0 + (x - drag.start.0),
            drag.base_pos.1 + (y - drag.start.1),
        );
        piece.pos = clamp_to_container(next, piece.size, container);
    }

    pub fn rotate(&mut self, direction: SpinDirection) {
        let Some(drag) = self.state.drag else {
            return;
        };
        let step = self.state.rules.rotation_step_deg;
        let delta = match direction {
            SpinDirection::Clockwise => step,
            SpinDirection::CounterClockwise => -step,
        };
        if let Some(piece) = self.state.pieces.get_mut(drag.piece_id) {
            // Cumulative and unnormalized; normalization happens only on comparison.
            piece.rot_deg += delta;
        }
    }

    pub fn drag_end(&mut self, pointer_id: Option<i32>) -> DropOutcome {
        let Some(drag) = self.state.drag else {
            return DropOutcome::NoDrag;
        };
        if drag.pointer_id.is_some() && pointer_id.is_none() {
            return DropOutcome::NoDrag;
        }
        if pointer_id.is_some() && drag.pointer_id != pointer_id {
            return DropOutcome::NoDrag;
        }
        self.state.drag = None;
        self.evaluate_drop(drag.piece_id)
    }

    fn evaluate_drop(&mut self, piece_id: usize) -> DropOutcome {
        let container = self.state.container;
        let rules = self.state.rules;
        let Some(piece) = self.state.pieces.get(piece_id).copied() else {
            return DropOutcome::Released;
        };
        if piece.locked {
            return DropOutcome::Released;
        }
        let Some(target) = self.targets.get(piece_id).copied() else {
            return DropOutcome::Released;
        };
        match target {
            None => {
                let center = center_of(piece.pos, piece.size);
                if !center_inside(center, container) {
                    return DropOutcome::OutsideBounds;
                }
                self.lock_piece(piece_id, piece.pos, 0.0);
                DropOutcome::Locked
            }
            Some(target) => {
                let Some(anchor) = self.state.pieces.get(target.anchor).copied() else {
                    return DropOutcome::Released;
                };
                if !anchor.locked {
                    return DropOutcome::Released;
                }
                let anchor_center = center_of(anchor.pos, anchor.size);
                let wanted = (
                    anchor_center.0 + target.offset.0,
                    anchor_center.1 + target.offset.1,
                );
                let center = center_of(piece.pos, piece.size);
                if distance(center, wanted) > rules.snap_distance_px {
                    return DropOutcome::Released;
                }
                if !angle_matches(piece.rot_deg, target.rot_deg, rules.rotation_tolerance_deg) {
                    return DropOutcome::Released;
                }
                let snapped =
                    clamp_to_container(pos_for_center(wanted, piece.size), piece.size, container);
                self.lock_piece(piece_id, snapped, target.rot_deg);
                DropOutcome::Locked
            }
        }
    }

    fn lock_piece(&mut self, piece_id: usize, pos: (f32, f32), rot_deg: f32) {
        if let Some(piece) = self.state.pieces.get_mut(piece_id) {
            piece.pos = pos;
            piece.rot_deg = rot_deg;
            piece.locked = true;
        }
        if self.state.selected == Some(piece_id) {
            self.state.selected = None;
        }
        if self.state.pieces.iter().all(|piece| piece.locked) {
            self.state.complete = true;
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.state.pieces.is_empty() && self.state.pieces.iter().all(|piece| piece.locked)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let active_id = self.state.drag.map(|drag| drag.piece_id);
        let pieces = self
            .scene
            .pieces
            .iter()
            .zip(self.state.pieces.iter())
            .enumerate()
            .map(|(idx, (spec, piece))| PieceSnapshot {
                id: spec.id.to_string(),
                pos: piece.pos,
                size: piece.size,
                rot_deg: piece.rot_deg,
                selected: self.state.selected == Some(idx),
                dragging: active_id == Some(idx),
                locked: piece.locked,
            })
            .collect();
        EngineSnapshot {
            scene: self.scene.slug.to_string(),
            container: self.state.container,
            rules: self.state.rules,
            pieces,
            active_id,
            selected_id: self.state.selected,
            complete: self.state.complete,
        }
    }
}
