#[derive(Clone, Copy, Debug)]
pub struct PlacementRule {
    pub anchor: &'static str,
    pub dx: f32,
    pub dy: f32,
    pub rot_deg: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PieceSpec {
    pub id: &'static str,
    pub initial_rotation_deg: f32,
    pub rule: Option<PlacementRule>,
}

#[derive(Clone, Copy, Debug)]
pub struct SceneSpec {
    pub label: &'static str,
    pub slug: &'static str,
    pub pieces: &'static [PieceSpec],
}

pub const DEFAULT_SCENE_SLUG: &str = "house-and-trees";

pub const SCENE_CATALOG: &[SceneSpec] = &[SceneSpec {
    label: "House and Trees",
    slug: DEFAULT_SCENE_SLUG,
    pieces: &[
        PieceSpec {
            id: "house",
            initial_rotation_deg: 0.0,
            rule: None,
        },
        PieceSpec {
            id: "roof",
            initial_rotation_deg: 0.0,
            rule: Some(PlacementRule {
                anchor: "house",
                dx: 0.0,
                dy: -46.0,
                rot_deg: 0.0,
            }),
        },
        PieceSpec {
            id: "tree1",
            initial_rotation_deg: 0.0,
            rule: None,
        },
        PieceSpec {
            id: "tree2",
            initial_rotation_deg: 0.0,
            rule: Some(PlacementRule {
                anchor: "tree1",
                dx: 0.0,
                dy: -44.0,
                rot_deg: 0.0,
            }),
        },
        PieceSpec {
            id: "trunk",
            initial_rotation_deg: 0.0,
            rule: Some(PlacementRule {
                anchor: "tree1",
                dx: 0.0,
                dy: 46.0,
                rot_deg: 0.0,
            }),
        },
    ],
}];

pub fn scene_by_slug(slug: &str) -> Option<&'static SceneSpec> {
    let trimmed = slug.trim();
    SCENE_CATALOG
        .iter()
        .find(|scene| scene.slug.eq_ignore_ascii_case(trimmed))
}

pub fn piece_index(scene: &SceneSpec, id: &str) -> Option<usize> {
    scene.pieces.iter().position(|piece| piece.id == id)
}

pub fn validate_scene(scene: &SceneSpec) -> Result<(), String> {
    if scene.pieces.is_empty() {
        return Err("scene has no pieces".to_string());
    }
    for (idx, piece) in scene.pieces.iter().enumerate() {
        if piece.id.trim().is_empty() {
            return Err("piece with empty id".to_string());
        }
        if scene.pieces[..idx].iter().any(|other| other.id == piece.id) {
            return Err(format!("duplicate piece id: {}", piece.id));
        }
        if let Some(rule) = &piece.rule {
            if rule.anchor == piece.id {
                return Err(format!("piece anchored to itself: {}", piece.id));
            }
            match scene.pieces.iter().find(|other| other.id == rule.anchor) {
                None => {
                    return Err(format!(
                        "unknown anchor {} for piece {}",
                        rule.anchor, piece.id
                    ));
                }
                Some(anchor) if anchor.rule.is_some() => {
                    return Err(format!(
                        "anchor {} for piece {} is itself a dependent",
                        rule.anchor, piece.id
                    ));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
