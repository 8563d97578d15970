//! Nearest-object selection.

use sl_core::{ObjectId, Vec2};

use crate::Interactable;

/// Return the object whose center is closest to `from`.
///
/// Ranks by squared Euclidean distance.  Ties go to the first candidate in
/// iteration order: the scan only replaces the incumbent on a strictly
/// smaller distance.  An empty input yields `None`.
pub fn nearest<'a, I>(candidates: I, from: Vec2) -> Option<ObjectId>
where
    I: IntoIterator<Item = (ObjectId, &'a Interactable)>,
{
    let mut best: Option<(ObjectId, f64)> = None;
    for (id, object) in candidates {
        let d2 = object.center().distance_sq(from);
        match best {
            Some((_, best_d2)) if d2 >= best_d2 => {}
            _ => best = Some((id, d2)),
        }
    }
    best.map(|(id, _)| id)
}
