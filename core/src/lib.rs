pub mod action;
pub mod engine;
pub mod game;
pub mod scene;
pub mod snapshot;
pub mod state;

pub use action::{EngineAction, SpinDirection};
pub use engine::{DropOutcome, PieceInit, PlacementEngine};
pub use scene::{
    scene_by_slug, PieceSpec, PlacementRule, SceneSpec, DEFAULT_SCENE_SLUG, SCENE_CATALOG,
};
pub use snapshot::{EngineSnapshot, GameRules, PieceSnapshot};
