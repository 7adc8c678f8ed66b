use crate::{api::ApiError, utils::dialog};
use leptos::*;
use std::future::Future;

/// Counter read by a resource source; bumping it refetches the collection.
#[derive(Clone, Copy)]
pub struct ReloadToken(RwSignal<u32>);

impl Default for ReloadToken {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadToken {
    pub fn new() -> Self {
        Self(create_rw_signal(0))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn bump(&self) {
        let _ = self.0.try_update(|value| *value = value.wrapping_add(1));
    }
}

/// Runs a server mutation and reloads only when it succeeded.
pub async fn run_mutation<T, F>(operation: F, reload: impl FnOnce()) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match operation.await {
        Ok(value) => {
            reload();
            Ok(value)
        }
        Err(err) => {
            log::error!("Mutation failed: {}", err);
            Err(err)
        }
    }
}

/// Mutation failures interrupt with a native alert.
pub fn alert_on_error<T>(result: &Result<T, ApiError>) {
    if let Err(err) = result {
        dialog::alert(&err.error);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(ApiError),
    Empty,
    Ready(Vec<T>),
}

pub fn load_state<T>(value: Option<Result<Vec<T>, ApiError>>) -> LoadState<T> {
    match value {
        None => LoadState::Loading,
        Some(Err(err)) => LoadState::Failed(err),
        Some(Ok(items)) if items.is_empty() => LoadState::Empty,
        Some(Ok(items)) => LoadState::Ready(items),
    }
}
