/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Loading state of remotely fetched data.
//!
//! A view owns a [`ViewScope`] and one [`Section`] per independently fetched
//! piece of data. Sections settle on their own, so a view may show some
//! sections ready while others still load or have failed. Once the scope is
//! unmounted, late results are dropped instead of written.

use crate::error::*;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Failed(ConnectorError),
    Ready(T),
}

impl<T> Resource<T> {
    pub fn from_result(result: ConnectorResult<T>) -> Self {
        match result {
            Ok(data) => Resource::Ready(data),
            Err(e) => Resource::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Resource::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ConnectorError> {
        match self {
            Resource::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resource<U> {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Failed(e) => Resource::Failed(e),
            Resource::Ready(data) => Resource::Ready(f(data)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewScope {
    mounted: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn mount() -> Self {
        ViewScope {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn section<T>(&self, name: &'static str) -> Section<T> {
        Section {
            name,
            scope: self.clone(),
            state: Arc::new(Mutex::new(Resource::Loading)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Section<T> {
    name: &'static str,
    scope: ViewScope,
    state: Arc<Mutex<Resource<T>>>,
}

impl<T> Section<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn lock(&self) -> MutexGuard<'_, Resource<T>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stores `result` unless the owning view is gone. Returns whether the
    /// result was kept.
    pub fn settle(&self, result: ConnectorResult<T>) -> bool {
        if !self.scope.is_mounted() {
            tracing::warn!(section = self.name, "view unmounted, discarding result");
            return false;
        }

        if let Err(e) = &result {
            tracing::debug!(section = self.name, "section failed: {}", e);
        }

        *self.lock() = Resource::from_result(result);
        true
    }

    /// Runs `fetch` and settles its outcome. Calling it again is the retry.
    pub async fn load<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = ConnectorResult<T>>,
    {
        if self.scope.is_mounted() {
            *self.lock() = Resource::Loading;
        }

        let result = fetch.await;
        self.settle(result)
    }

    pub fn with<R>(&self, f: impl FnOnce(&Resource<T>) -> R) -> R {
        f(&self.lock())
    }
}

impl<T: Clone> Section<T> {
    pub fn snapshot(&self) -> Resource<T> {
        self.lock().clone()
    }
}
