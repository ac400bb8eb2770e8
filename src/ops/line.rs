//! Line chart mutation operations.

use crate::data::{DatasetStore, LinePoint};
use crate::input::{GesturePayload, TargetKey};
use crate::types::LineOp;

use super::{ScratchTable, assigned_update, stepped_update};

pub(super) fn apply(
    op: LineOp,
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
) -> bool {
    match op {
        LineOp::AddPoint => {
            // only the committed position adds a point; previews would
            // spray one point per move event
            if payload.preview {
                return false;
            }
            let Some(scale) = payload.context.y_scale else {
                return false;
            };
            let day = store.line.iter().map(|p| p.day).max().map_or(1, |d| d + 1);
            let height = (scale.invert(payload.event_y).round() as i64).max(0);
            store.line.push(LinePoint::new(day, height));
            true
        }
        LineOp::RemovePoint => {
            // subtractive on height, applied directly (no preview cycle)
            let Some(day) = payload.context.line_day() else {
                return false;
            };
            let Some(point) = store.line_point_mut(day) else {
                return false;
            };
            point.height = (point.height - payload.amount).max(0);
            true
        }
        LineOp::AddPointHeight => step(store, scratch, payload, payload.amount),
        LineOp::RemovePointHeight => step(store, scratch, payload, -payload.amount),
        LineOp::ChangePointHeight => {
            let Some(day) = payload.context.line_day() else {
                return false;
            };
            let Some(scale) = payload.context.y_scale else {
                return false;
            };
            let new_height = scale.invert(payload.event_y).round() as i64;
            let key = TargetKey::Point(day);
            let Some(point) = store.line_point_mut(day) else {
                return false;
            };
            assigned_update(&mut point.height, &key, scratch, new_height, payload)
        }
        LineOp::AddLine => {
            let Some(day) = payload.context.line_day() else {
                return false;
            };
            if store.line.iter().any(|p| p.day == day) {
                return false;
            }
            store
                .line
                .push(LinePoint::new(day, payload.context.amount.max(0)));
            true
        }
        LineOp::RemoveLine => {
            let Some(day) = payload.context.line_day() else {
                return false;
            };
            match store.line.iter().position(|p| p.day == day) {
                Some(i) => {
                    store.line.remove(i);
                    true
                }
                None => false,
            }
        }
    }
}

fn step(
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
    amount: i64,
) -> bool {
    let Some(day) = payload.context.line_day() else {
        return false;
    };
    let key = TargetKey::Point(day);
    let Some(point) = store.line_point_mut(day) else {
        return false;
    };
    stepped_update(&mut point.height, &key, scratch, amount, payload)
}
