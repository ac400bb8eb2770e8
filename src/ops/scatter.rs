//! Scatterplot mutation operations.
//!
//! Scatter points are resolved by their stable [`PointId`], never by
//! positional index - an index can point at a different record after a
//! mid-gesture add or remove.

use rand::Rng;

use crate::data::{DatasetStore, ScatterPoint};
use crate::external::NameSource;
use crate::input::{GesturePayload, TargetKey};
use crate::types::ScatterOp;

use super::ScratchTable;

pub(super) fn apply(
    op: ScatterOp,
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
    names: &mut dyn NameSource,
) -> bool {
    match op {
        ScatterOp::AddPoint => {
            let (Some(x_scale), Some(y_scale)) =
                (payload.context.x_scale, payload.context.y_scale)
            else {
                return false;
            };
            let x = x_scale.invert(payload.event_x).round() as i64;
            let y = y_scale.invert(payload.event_y).round() as i64;
            let category = store
                .scatter
                .first()
                .map(|p| p.category.clone())
                .unwrap_or_else(|| "Food".to_string());
            store.scatter.push(ScatterPoint::new(x, y, category));
            true
        }
        ScatterOp::RemovePoint => {
            let Some(id) = payload.context.scatter_id() else {
                return false;
            };
            match store.scatter_index(id) {
                Some(i) => {
                    store.scatter.remove(i);
                    true
                }
                None => false,
            }
        }
        ScatterOp::AddCategory => {
            let Some(name) = names.request_name("Enter name for new category:", "New Category")
            else {
                return false;
            };
            let mut rng = rand::thread_rng();
            let x = rng.gen_range(0..5i64);
            let y = rng.gen_range(0..5i64) + 10;
            store.scatter.push(ScatterPoint::new(x, y, name));
            true
        }
        ScatterOp::RemoveCategory => {
            // removes the whole category of the targeted point
            let Some(id) = payload.context.scatter_id() else {
                return false;
            };
            let Some(category) = store
                .scatter
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.category.clone())
            else {
                return false;
            };
            let before = store.scatter.len();
            store.scatter.retain(|p| p.category != category);
            store.scatter.len() != before
        }
        ScatterOp::ChangePointLocation => {
            let Some(id) = payload.context.scatter_id() else {
                return false;
            };
            let (Some(x_scale), Some(y_scale)) =
                (payload.context.x_scale, payload.context.y_scale)
            else {
                return false;
            };
            let new_x = x_scale.invert(payload.event_x).round() as i64;
            let new_y = y_scale.invert(payload.event_y).round() as i64;
            let key = TargetKey::Scatter(id);
            let Some(point) = store.scatter_mut(id) else {
                return false;
            };
            if payload.preview {
                scratch.original_position(&key, (point.x, point.y));
                point.x = new_x;
                point.y = new_y;
            } else if payload.final_update {
                scratch.clear_key(&key);
            } else {
                point.x = new_x;
                point.y = new_y;
                scratch.clear_key(&key);
            }
            true
        }
        ScatterOp::ChangePointColor => {
            let Some(id) = payload.context.scatter_id() else {
                return false;
            };
            let categories = store.scatter_categories();
            if categories.is_empty() {
                return false;
            }
            let Some(point) = store.scatter_mut(id) else {
                return false;
            };
            let current = categories
                .iter()
                .position(|c| *c == point.category)
                .unwrap_or(0);
            let next = (current + 1) % categories.len();
            point.category = categories[next].clone();
            true
        }
    }
}
