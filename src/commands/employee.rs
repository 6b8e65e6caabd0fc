/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use anyhow::{Result, anyhow};
use clap::Subcommand;
use connector::api::AgencyApi;
use connector::error::ConnectorError;
use connector::gate::Route;
use connector::listing::*;
use connector::models::*;
use connector::roster::*;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long, default_value = "all")]
        status: String,
        #[arg(short = 'q', long, default_value = "")]
        search: String,
        #[arg(short = 'o', long)]
        sort: Option<SortKey>,
    },
    Edit {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        address: Option<String>,
        #[arg(short, long)]
        status: Option<String>,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle(cmd: Commands) -> Result<()> {
    let ctx = Context::open(Route::Employees)?;

    match cmd {
        Commands::List {
            status,
            search,
            sort,
        } => {
            let employees = ctx.api.employees().await?;
            warn_unsupported_sort::<Employee>(sort);

            let query = ListQuery::new(&status, &search, sort);
            print_employees(&derive_view(&employees, &query));
        }

        Commands::Edit {
            id,
            name,
            email,
            phone,
            address,
            status,
        } => {
            let employees = ctx.api.employees().await?;
            let current = find(&employees, &id)?;
            let mut update = EmployeeUpdate::from(current);

            if name.is_none() && email.is_none() && phone.is_none() && address.is_none() && status.is_none() {
                update.full_name = ask_with_default("Full name", &update.full_name)?;
                update.email = ask_with_default("Email", &update.email)?;
                update.phone = ask_with_default("Phone", &update.phone)?;
                update.address = ask_with_default("Address", &update.address)?;
                let current_status = match update.employment_status {
                    EmploymentStatus::Unknown => "",
                    ref status => status.as_ref(),
                };
                let status = ask_with_default("Status", current_status)?;
                update.employment_status = parse_status(&status)?;
            } else {
                update.full_name = name.unwrap_or(update.full_name);
                update.email = email.unwrap_or(update.email);
                update.phone = phone.unwrap_or(update.phone);
                update.address = address.unwrap_or(update.address);

                if let Some(status) = status {
                    update.employment_status = parse_status(&status)?;
                }
            }

            let employees = edit_employee(&ctx.api, &id, &update).await?;
            println!("Employee updated.");
            print_employees(&employees.iter().collect::<Vec<_>>());
        }

        Commands::Delete { id, yes } => {
            let employees = ctx.api.employees().await?;
            let target = find(&employees, &id)?.clone();

            let remaining = remove_employee(&ctx.api, &target, |employee| {
                yes || confirm(&format!("Delete {} ({})?", employee.full_name, employee.email))
                    .unwrap_or(false)
            })
            .await?;

            match remaining {
                Some(employees) => {
                    println!("Employee deleted.");
                    print_employees(&employees.iter().collect::<Vec<_>>());
                }
                None => println!("Cancelled."),
            }
        }
    }

    Ok(())
}

fn find<'a>(employees: &'a [Employee], id: &str) -> Result<&'a Employee, ConnectorError> {
    employees
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| ConnectorError::not_found("Employee"))
}

fn parse_status(value: &str) -> Result<EmploymentStatus> {
    EmploymentStatus::from_str(value).map_err(|_| {
        let valid = EmploymentStatus::iter()
            .filter(|s| *s != EmploymentStatus::Unknown)
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("Unknown employment status `{}`. Valid values are: {}", value, valid)
    })
}

fn print_employees(employees: &[&Employee]) {
    if employees.is_empty() {
        println!("No employees match.");
        return;
    }

    for employee in employees {
        println!(
            "{:<10} {:<24} {:<28} {:<16} {}",
            employee.id,
            employee.full_name,
            employee.email,
            or_dash(&employee.phone),
            employee.status_label().unwrap_or("-"),
        );
    }
}
