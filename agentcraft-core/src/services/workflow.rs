//! Synchronous halves of the list/modal/delete workflows.
//!
//! Each `begin_*` runs before the remote call and each `finish_*` applies its
//! outcome. The UI runs the remote call in between on another task; the
//! `finish_*` functions clear `loading` on every path.

use agentcraft_client::Resource;

use crate::error::{CoreError, CoreResult};
use crate::form::{Draft, FormController};
use crate::store::ResourceStore;

pub fn begin_refresh<R: Resource>(store: &mut ResourceStore<R>) -> CoreResult<()> {
    if store.try_begin() {
        Ok(())
    } else {
        Err(CoreError::Busy)
    }
}

/// 应用刷新结果（后到的结果覆盖先到的）
pub fn finish_refresh<R: Resource>(
    store: &mut ResourceStore<R>,
    result: CoreResult<Vec<R>>,
) -> CoreResult<()> {
    store.set_loading(false);
    match result {
        Ok(list) => {
            store.replace_list(list);
            Ok(())
        }
        Err(e) => {
            store.set_error(e.to_string());
            Err(e)
        }
    }
}

/// Validate the form and take the loading guard.
///
/// Validation failures leave the store untouched.
pub fn begin_submit<R>(
    store: &mut ResourceStore<R>,
    form: &mut FormController<R::Draft>,
) -> CoreResult<R::Draft>
where
    R: Resource,
    R::Draft: Draft,
{
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }
    if !store.try_begin() {
        return Err(CoreError::Busy);
    }
    Ok(form.values().clone())
}

/// Apply a save outcome.
///
/// Success closes the modal and resets the form; failure keeps both so the
/// user can retry. Loading and the edit flag are cleared either way.
pub fn finish_submit<R>(
    store: &mut ResourceStore<R>,
    form: &mut FormController<R::Draft>,
    result: CoreResult<Vec<R>>,
) -> CoreResult<()>
where
    R: Resource,
    R::Draft: Draft,
{
    store.set_loading(false);
    store.set_edit_status(false);
    match result {
        Ok(list) => {
            store.replace_list(list);
            store.close_modal();
            form.reset();
            Ok(())
        }
        Err(e) => {
            store.set_error(e.to_string());
            Err(e)
        }
    }
}

pub fn begin_delete<R: Resource>(store: &mut ResourceStore<R>) -> CoreResult<()> {
    begin_refresh(store)
}

pub fn finish_delete<R: Resource>(
    store: &mut ResourceStore<R>,
    result: CoreResult<Vec<R>>,
) -> CoreResult<()> {
    finish_refresh(store, result)
}
