/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use anyhow::Result;
use connector::api::AgencyApi;
use connector::error::ConnectorError;
use connector::gate::Route;
use connector::models::*;
use connector::progress::*;
use connector::resource::*;
use connector::session::SessionStore;

pub async fn handle() -> Result<()> {
    let role = {
        let stored = crate::config::ConfigFile::open()?.load()?;
        stored.session().map(|s| s.role).ok_or(ConnectorError::NotLoggedIn)?
    };

    let ctx = Context::open(Route::dashboard(role))?;
    let scope = ViewScope::mount();

    let expired = match ctx.session.role {
        Role::Manager => manager(&ctx, &scope).await,
        Role::Employee => employee(&ctx, &scope).await,
        Role::Client => client(&ctx, &scope).await,
    };

    scope.unmount();

    match expired {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Prints one section. Returns the error when it means the session is gone.
fn render<T>(section: &Section<T>, show: impl FnOnce(&T)) -> Option<ConnectorError> {
    println!("== {} ==", section.name());

    section.with(|state| match state {
        Resource::Loading => {
            println!("Loading...");
            None
        }
        Resource::Failed(err) => {
            println!("Could not load: {}", err.user_message());
            err.is_session_expired().then(|| err.clone())
        }
        Resource::Ready(data) => {
            show(data);
            None
        }
    })
}

async fn manager(ctx: &Context, scope: &ViewScope) -> Option<ConnectorError> {
    let summary = scope.section::<ProjectSummary>("Projects");
    let employees = scope.section::<Vec<Employee>>("Team");
    let reviews = scope.section::<ReviewStats>("Company reviews");

    futures::join!(
        summary.load(ctx.api.project_summary()),
        employees.load(ctx.api.employees()),
        reviews.load(ctx.api.review_stats()),
    );

    let results = [
        render(&summary, |s| {
            println!("Total:        {}", s.total);
            println!("Waiting list: {}", s.waiting_list);
            println!("On progress:  {}", s.on_progress);
            println!("Completed:    {}", s.completed);
        }),
        render(&employees, |list| {
            let active = list
                .iter()
                .filter(|e| {
                    matches!(
                        e.employment_status,
                        EmploymentStatus::ActiveEmployee | EmploymentStatus::ActiveIntern
                    )
                })
                .count();
            println!("{} people, {} active", list.len(), active);
        }),
        render(&reviews, |stats| {
            println!(
                "{:.1} / 5 from {} reviews",
                stats.average_rating, stats.total_reviews
            );
        }),
    ];

    results.into_iter().flatten().next()
}

async fn employee(ctx: &Context, scope: &ViewScope) -> Option<ConnectorError> {
    let profile = scope.section::<Profile>("Profile");
    let projects = scope.section::<Vec<Project>>("Projects");
    let evaluations = scope.section::<Vec<EvaluationRecord>>("Evaluations");

    futures::join!(
        profile.load(ctx.api.profile(Role::Employee)),
        projects.load(ctx.api.projects()),
        evaluations.load(ctx.api.employee_evaluations()),
    );

    let results = [
        render(&profile, |p| println!("{} <{}>", p.full_name, p.email)),
        render(&projects, |list| print_project_progress(list)),
        render(&evaluations, |list| println!("{} evaluations received", list.len())),
    ];

    results.into_iter().flatten().next()
}

async fn client(ctx: &Context, scope: &ViewScope) -> Option<ConnectorError> {
    let profile = scope.section::<Profile>("Profile");
    let projects = scope.section::<Vec<ClientProject>>("Your projects");
    let total = scope.section::<ProjectTotal>("Project count");

    futures::join!(
        profile.load(ctx.api.profile(Role::Client)),
        projects.load(ctx.api.client_projects()),
        total.load(ctx.api.project_total()),
    );

    let results = [
        render(&profile, |p| println!("{} <{}>", p.full_name, p.email)),
        render(&projects, |list| {
            for entry in list {
                let mark = if entry.already_evaluated { "evaluated" } else { "open" };
                println!(
                    "{:<28} {} ({})",
                    entry.project.title,
                    progress_bar(overall_progress(&entry.project.sdlc_progress), 20),
                    mark
                );
            }
        }),
        render(&total, |t| println!("{} projects in total", t.total)),
    ];

    results.into_iter().flatten().next()
}

fn print_project_progress(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects.");
    }

    for project in projects {
        println!(
            "{:<28} {}",
            project.title,
            progress_bar(overall_progress(&project.sdlc_progress), 20)
        );
    }
}
