/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use anyhow::Result;
use clap::Subcommand;
use connector::api::AgencyApi;
use connector::gate::Route;
use connector::listing::*;
use connector::models::*;
use connector::progress::*;

const COMMITS_SHOWN: usize = 10;

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
    Show {
        id: String,
    },
    Summary,
}

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List {
            status,
            search,
            sort,
        } => {
            let ctx = Context::open(Route::Projects)?;
            let query = ListQuery::new(&status, &search, sort);

            // Clients only see their own projects, together with the evaluation flag.
            if ctx.session.role == Role::Client {
                let projects = ctx.api.client_projects().await?;
                let view = derive_view(&projects, &query);
                print_rows(view.iter().map(|p| (&p.project, Some(p.already_evaluated))));
            } else {
                let projects = ctx.api.projects().await?;
                warn_unsupported_sort::<Project>(sort);
                let view = derive_view(&projects, &query);
                print_rows(view.into_iter().map(|p| (p, None)));
            }
        }

        Commands::Show { id } => {
            let ctx = Context::open(Route::ProjectDetail)?;
            let project = ctx.api.project(&id).await?;
            print_project(&project);
        }

        Commands::Summary => {
            let ctx = Context::open(Route::ManagerDashboard)?;
            let (summary, total) = futures::join!(ctx.api.project_summary(), ctx.api.project_total());
            let summary = summary?;

            println!("Waiting list: {}", summary.waiting_list);
            println!("On progress:  {}", summary.on_progress);
            println!("Completed:    {}", summary.completed);
            println!("Total:        {}", summary.total);

            match total {
                Ok(total) if total.total != summary.total => {
                    println!("All projects: {}", total.total)
                }
                Ok(_) => {}
                Err(e) => eprintln!("Could not load project total: {}", e.user_message()),
            }
        }
    }

    Ok(())
}

fn print_rows<'a>(rows: impl Iterator<Item = (&'a Project, Option<bool>)>) {
    let mut empty = true;

    for (project, evaluated) in rows {
        empty = false;
        let evaluated = match evaluated {
            Some(true) => " evaluated",
            Some(false) => " not evaluated",
            None => "",
        };

        println!(
            "{:<10} {:<28} {:<12} {:<12} {}{}",
            project.id,
            project.title,
            project.status_label().unwrap_or("-"),
            project.deadline.as_deref().unwrap_or("-"),
            progress_bar(project.progress(), 10),
            evaluated,
        );
    }

    if empty {
        println!("No projects match.");
    }
}

fn print_project(project: &Project) {
    println!("===== Project =====");
    println!("ID: {}", project.id);
    println!("Title: {}", project.title);
    println!("Status: {}", project.status_label().unwrap_or("-"));
    println!("Client: {}", or_dash(project.client_name()));
    println!("Manager: {}", or_dash(project.manager_name()));
    println!("Framework: {}", or_dash(&project.framework));
    println!("Deadline: {}", project.deadline.as_deref().unwrap_or("-"));

    if let Some(done) = &project.completion_date {
        println!("Completed: {}", done);
    }

    if !project.figma_link.is_empty() {
        println!("Figma: {}", project.figma_link);
    }

    if !project.github_repo_url.is_empty() {
        println!("Repository: {}", project.github_repo_url);
    }

    if !project.description.is_empty() {
        println!();
        println!("{}", project.description);
    }
    println!();

    println!("===== Progress =====");
    for stage in SDLC_STAGES {
        let percent = stage_progress(&project.sdlc_progress, stage).round() as u8;
        println!("{:<15} {}", stage, progress_bar(percent, 20));
    }
    println!("{:<15} {}", "overall", progress_bar(overall_progress(&project.sdlc_progress), 20));
    println!();

    let team: Vec<&str> = project
        .employees
        .iter()
        .map(|e| match e {
            Reference::Populated(employee) => employee.full_name.as_str(),
            Reference::Id(id) => id.as_str(),
        })
        .collect();

    if !team.is_empty() {
        println!("===== Team =====");
        for member in team {
            println!("{}", member);
        }
        println!();
    }

    if !project.github_commits.is_empty() {
        println!("===== Commits =====");
        for commit in project.github_commits.iter().take(COMMITS_SHOWN) {
            println!(
                "{} {} ({})",
                commit.date.as_deref().unwrap_or("-"),
                commit.message.lines().next().unwrap_or(""),
                commit.author
            );
        }
        println!();
    }

    if !project.github_issues.is_empty() {
        println!("===== Issues =====");
        for issue in &project.github_issues {
            let state = match issue.state {
                IssueState::Open => "open",
                IssueState::Closed => "closed",
                IssueState::Unknown => "?",
            };
            println!("#{:<5} {:<7} {}", issue.number, state, issue.title);
        }
    }
}
