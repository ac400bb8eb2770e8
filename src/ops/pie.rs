//! Pie chart mutation operations.

use crate::constants::{NEW_RECORD_VALUE, SECTION_CHANGE_QUANTUM};
use crate::data::{DatasetStore, PieSlice};
use crate::external::NameSource;
use crate::input::{GesturePayload, TargetKey};
use crate::types::PieOp;

use super::{ScratchTable, stepped_update};

pub(super) fn apply(
    op: PieOp,
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
    names: &mut dyn NameSource,
) -> bool {
    match op {
        PieOp::AddToSection => step(store, scratch, payload, payload.amount),
        PieOp::RemoveFromSection => step(store, scratch, payload, -payload.amount),
        PieOp::ChangeSection => {
            // upward drags grow the section; magnitude comes from drag
            // distance on a coarser quantum than the generic pan amount
            let change = (payload.distance / SECTION_CHANGE_QUANTUM).round() as i64;
            let direction = if payload.delta_y < 0.0 { 1 } else { -1 };
            // a discrete invocation with no drag distance changes nothing
            if change == 0 && !payload.preview && !payload.final_update {
                return false;
            }
            step(store, scratch, payload, change * direction)
        }
        PieOp::AddSection => {
            let Some(name) = names.request_name("Enter name for new section:", "New Section")
            else {
                return false;
            };
            if store.slice_mut(&name).is_some() {
                return false;
            }
            store.pie.push(PieSlice::new(name, NEW_RECORD_VALUE));
            true
        }
        PieOp::RemoveSection => {
            let Some(task) = payload.context.slice_task() else {
                return false;
            };
            match store.pie.iter().position(|s| s.task == task) {
                Some(i) => {
                    store.pie.remove(i);
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
    let Some(task) = payload.context.slice_task().map(str::to_owned) else {
        return false;
    };
    let key = TargetKey::Slice(task.clone());
    let Some(slice) = store.slice_mut(&task) else {
        return false;
    };
    stepped_update(&mut slice.value, &key, scratch, amount, payload)
}
