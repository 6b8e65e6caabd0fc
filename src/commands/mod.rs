/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod base;
pub mod client;
pub mod dashboard;
pub mod employee;
pub mod evaluation;
pub mod profile;
pub mod project;
pub mod review;

use crate::config::ConfigFile;
use crate::input::get_request_config;
use anyhow::{Result, bail};
use connector::error::ConnectorError;
use connector::gate::*;
use connector::http::HttpApi;
use connector::listing::{Listable, SortKey};
use connector::session::{Session, SessionStore};

/// Everything a command needs once the gate let it through.
pub struct Context {
    pub api: HttpApi,
    pub session: Session,
}

impl Context {
    pub fn open(route: Route) -> Result<Self> {
        let config = ConfigFile::open()?;
        let stored = config.load()?;

        match check_route(&stored, route) {
            GateDecision::RedirectLogin => return Err(ConnectorError::NotLoggedIn.into()),
            GateDecision::RedirectUnauthorized => {
                bail!("Unauthorized: {} is not available for your role.", route)
            }
            GateDecision::Render => {}
        }

        let session = stored.session().ok_or(ConnectorError::NotLoggedIn)?;
        tracing::debug!(%route, role = %session.role, "route granted");

        Ok(Context {
            api: HttpApi::new(get_request_config(&config)?),
            session,
        })
    }
}

pub(crate) fn warn_unsupported_sort<T: Listable>(sort: Option<SortKey>) {
    if let Some(key) = sort.filter(|key| !T::SORT_KEYS.contains(key)) {
        let valid = T::SORT_KEYS
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("Sort key `{}` does not apply here (valid: {}); keeping list order.", key, valid);
    }
}

pub(crate) fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
