/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::models::Role;
use crate::session::StoredSession;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Route {
    Landing,
    Login,
    Unauthorized,
    ManagerDashboard,
    EmployeeDashboard,
    ClientDashboard,
    Employees,
    Clients,
    Projects,
    ProjectDetail,
    Profile,
    MyEvaluations,
    DetailedEvaluations,
    Evaluate,
    CompanyReview,
    Reviews,
    ReviewModeration,
    ReviewStats,
}

const ALL_ROLES: &[Role] = &[Role::Manager, Role::Employee, Role::Client];

impl Route {
    /// Roles allowed on this route; `None` for public routes.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Landing | Route::Login | Route::Unauthorized => None,
            Route::ManagerDashboard
            | Route::Employees
            | Route::Clients
            | Route::DetailedEvaluations
            | Route::ReviewModeration
            | Route::ReviewStats => Some(&[Role::Manager]),
            Route::EmployeeDashboard => Some(&[Role::Employee]),
            Route::ClientDashboard | Route::Evaluate | Route::CompanyReview => {
                Some(&[Role::Client])
            }
            Route::Projects
            | Route::ProjectDetail
            | Route::Profile
            | Route::Reviews
            | Route::MyEvaluations => Some(ALL_ROLES),
        }
    }

    pub fn dashboard(role: Role) -> Route {
        match role {
            Role::Manager => Route::ManagerDashboard,
            Role::Employee => Route::EmployeeDashboard,
            Role::Client => Route::ClientDashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    RedirectLogin,
    RedirectUnauthorized,
    Render,
}

/// Decides whether `route` renders for the stored session. Token validity
/// is not checked here; a stale token surfaces as a rejected API call.
pub fn check(token: Option<&str>, role: Option<&str>, allowed: &[Role]) -> GateDecision {
    if token.is_none_or(|t| t.trim().is_empty()) {
        return GateDecision::RedirectLogin;
    }

    let permitted = role
        .and_then(Role::from_login)
        .is_some_and(|role| allowed.contains(&role));

    if permitted {
        GateDecision::Render
    } else {
        GateDecision::RedirectUnauthorized
    }
}

pub fn check_route(stored: &StoredSession, route: Route) -> GateDecision {
    match route.allowed_roles() {
        None => GateDecision::Render,
        Some(allowed) => check(stored.token(), stored.role(), allowed),
    }
}
