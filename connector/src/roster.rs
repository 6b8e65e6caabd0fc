/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::api::AgencyApi;
use crate::error::*;
use crate::models::*;

/// Deletes an employee after `confirm` agrees, then fetches the list once
/// more. A declined confirmation touches nothing and yields `None`.
pub async fn remove_employee<A, F>(
    api: &A,
    employee: &Employee,
    confirm: F,
) -> ConnectorResult<Option<Vec<Employee>>>
where
    A: AgencyApi + ?Sized,
    F: FnOnce(&Employee) -> bool,
{
    if !confirm(employee) {
        return Ok(None);
    }

    api.delete_employee(&employee.id).await?;
    tracing::info!(employee = %employee.id, "employee removed");

    api.employees().await.map(Some)
}

pub fn validate_employee(update: &EmployeeUpdate) -> ConnectorResult<()> {
    if update.full_name.trim().is_empty() {
        return Err(ConnectorError::validation("Full name cannot be empty."));
    }

    if !update.email.contains('@') {
        return Err(ConnectorError::validation("Email address is not valid."));
    }

    if update.employment_status == EmploymentStatus::Unknown {
        return Err(ConnectorError::validation("Employment status is required."));
    }

    Ok(())
}

/// Replaces an employee record and returns the refreshed list.
pub async fn edit_employee<A>(
    api: &A,
    id: &str,
    update: &EmployeeUpdate,
) -> ConnectorResult<Vec<Employee>>
where
    A: AgencyApi + ?Sized,
{
    validate_employee(update)?;
    api.update_employee(id, update).await?;
    api.employees().await
}
