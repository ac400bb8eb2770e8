//! Bar chart mutation operations.

use crate::constants::NEW_RECORD_VALUE;
use crate::data::{BarRecord, DatasetStore};
use crate::external::NameSource;
use crate::input::{GesturePayload, TargetKey};
use crate::types::BarOp;

use super::{ScratchTable, assigned_update, avg_round, stepped_update};

pub(super) fn apply(
    op: BarOp,
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
    names: &mut dyn NameSource,
) -> bool {
    match op {
        BarOp::AddToBar => step(store, scratch, payload, payload.amount),
        BarOp::RemoveFromBar => step(store, scratch, payload, -payload.amount),
        BarOp::ChangeBar => {
            let Some(subject) = payload.context.bar_subject().map(str::to_owned) else {
                return false;
            };
            let Some(scale) = payload.context.y_scale else {
                return false;
            };
            let new_time = scale.invert(payload.event_y).round() as i64;
            let key = TargetKey::Bar(subject.clone());
            let Some(bar) = store.bar_mut(&subject) else {
                return false;
            };
            assigned_update(&mut bar.time, &key, scratch, new_time, payload)
        }
        BarOp::AddBar => {
            let Some(name) = names.request_name("Enter name for new bar:", "New Category") else {
                return false;
            };
            // subjects are the natural key; duplicates are rejected
            if store.bar_index(&name).is_some() {
                return false;
            }
            store.bar.push(BarRecord::new(name, NEW_RECORD_VALUE));
            true
        }
        BarOp::RemoveBar => {
            let Some(subject) = payload.context.bar_subject() else {
                return false;
            };
            match store.bar_index(subject) {
                Some(i) => {
                    store.bar.remove(i);
                    true
                }
                None => false,
            }
        }
        BarOp::MergeBars => {
            let Some(subject) = payload.context.bar_subject() else {
                return false;
            };
            let Some(i) = store.bar_index(subject) else {
                return false;
            };
            // merge with the immediate right neighbor; the last bar has none
            if i + 1 >= store.bar.len() {
                return false;
            }
            store.bar[i].time = avg_round(store.bar[i].time, store.bar[i + 1].time);
            store.bar.remove(i + 1);
            true
        }
        BarOp::ReorderBars => {
            let Some(subject) = payload.context.bar_subject() else {
                return false;
            };
            let Some(i) = store.bar_index(subject) else {
                return false;
            };
            // swap with the neighbor in the gesture direction
            if payload.amount < 0 {
                if i == 0 {
                    return false;
                }
                store.bar.swap(i, i - 1);
            } else {
                if i + 1 >= store.bar.len() {
                    return false;
                }
                store.bar.swap(i, i + 1);
            }
            true
        }
    }
}

fn step(
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
    amount: i64,
) -> bool {
    let Some(subject) = payload.context.bar_subject().map(str::to_owned) else {
        return false;
    };
    let key = TargetKey::Bar(subject.clone());
    let Some(bar) = store.bar_mut(&subject) else {
        return false;
    };
    stepped_update(&mut bar.time, &key, scratch, amount, payload)
}
