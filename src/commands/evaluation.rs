/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use anyhow::{Result, bail};
use clap::Subcommand;
use connector::api::AgencyApi;
use connector::error::ConnectorError;
use connector::flow::*;
use connector::gate::Route;
use connector::models::*;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one of your projects, then review the company
    Submit {
        project: Option<String>,
        #[arg(long)]
        skip_review: bool,
    },
    /// Evaluations you gave or received
    Mine,
    /// Detailed employee evaluations
    Detailed {
        employee: Option<String>,
    },
    /// Rate an employee against the employee rubric
    Rate {
        employee: String,
        #[arg(short, long)]
        period: Option<String>,
    },
}

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Submit {
            project,
            skip_review,
        } => {
            let ctx = Context::open(Route::Evaluate)?;
            let project = match project {
                Some(project) => project,
                None => pick_project(&ctx).await?,
            };

            let mut flow = EvaluationFlow::open(&ctx.api, Rubric::standard(), &project).await?;

            if flow.already_evaluated() {
                return Err(ConnectorError::AlreadyEvaluated(project).into());
            }

            for index in 0..flow.rubric().len() {
                let aspect = flow.rubric().aspects[index].clone();
                let value = ask_for_score(&aspect)?;
                flow.select(index, value)?;
            }
            flow.set_comment(&ask_for_text("Comment (optional)")?);

            let mut review = flow
                .submit_with_retry(&ctx.api, |e| {
                    eprintln!("{}", e.user_message());
                    confirm("Try again?").unwrap_or(false)
                })
                .await?;
            println!("Thank you, your evaluation was submitted.");

            if !skip_review {
                Context::open(Route::CompanyReview)?;
                println!();
                println!("How was working with us overall?");
                ask_review(&mut review)?;
                review.submit(&ctx.api).await?;
                println!("Thank you for your review.");
            }
        }

        Commands::Mine => {
            let ctx = Context::open(Route::MyEvaluations)?;
            let evaluations = match ctx.session.role {
                Role::Client => ctx.api.client_evaluations().await?,
                Role::Employee => ctx.api.employee_evaluations().await?,
                Role::Manager => bail!("Managers see evaluations with `agency evaluation detailed`."),
            };

            if evaluations.is_empty() {
                println!("No evaluations yet.");
            }

            for evaluation in evaluations {
                let title = if evaluation.project_title.is_empty() {
                    &evaluation.project_id
                } else {
                    &evaluation.project_title
                };
                let average = evaluation
                    .average_score
                    .map(|a| format!("{:.1}", a))
                    .unwrap_or_else(|| "-".to_string());

                println!(
                    "{:<28} avg {:<4} {:?} {}",
                    title,
                    average,
                    evaluation.scores,
                    or_dash(&evaluation.comment)
                );
            }
        }

        Commands::Detailed { employee } => {
            let ctx = Context::open(Route::DetailedEvaluations)?;

            match employee {
                Some(id) => print_detailed(&ctx.api.detailed_evaluation(&id).await?),
                None => {
                    let evaluations = ctx.api.detailed_evaluations().await?;

                    if evaluations.is_empty() {
                        println!("No detailed evaluations yet.");
                    }

                    for evaluation in &evaluations {
                        print_detailed(evaluation);
                        println!();
                    }
                }
            }
        }

        Commands::Rate { employee, period } => {
            let ctx = Context::open(Route::DetailedEvaluations)?;
            let rubric = Rubric::employee();

            let scores = rubric
                .aspects
                .iter()
                .map(ask_for_score)
                .collect::<Result<Vec<_>>>()?;
            let comment = ask_for_text("Comment (optional)")?;

            let request = detailed_evaluation(&rubric, &scores, &comment, period)?;
            ctx.api.submit_detailed_evaluation(&employee, &request).await?;
            println!("Evaluation saved.");
        }
    }

    Ok(())
}

async fn pick_project(ctx: &Context) -> Result<String> {
    let open: Vec<ClientProject> = ctx
        .api
        .client_projects()
        .await?
        .into_iter()
        .filter(|p| !p.already_evaluated)
        .collect();

    if open.is_empty() {
        bail!("All of your projects have already been evaluated.");
    }

    for (i, entry) in open.iter().enumerate() {
        println!("{}) {}", i + 1, entry.project.title);
    }

    let choice = ask_for_input("Project")?;
    let picked = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| open.get(n));

    match picked {
        Some(entry) => Ok(entry.project.id.clone()),
        None => Err(ConnectorError::validation("Project is required.").into()),
    }
}

fn ask_for_score(aspect: &Aspect) -> Result<u8> {
    println!("{}", aspect.name);
    for criterion in &aspect.criteria {
        println!("  {}) {}", criterion.value, criterion.label);
    }

    loop {
        let answer = ask_for_input("Score")?;

        match answer.parse::<u8>() {
            Ok(value) if aspect.accepts(value) => return Ok(value),
            _ => eprintln!("{} is not a valid score for {}.", answer, aspect.name),
        }
    }
}

pub(crate) fn ask_review(review: &mut CompanyReviewFlow) -> Result<()> {
    loop {
        let rating = ask_for_input("Rating (1-5)")?;
        review.set_rating(rating.parse().unwrap_or(0));
        review.set_comment(&ask_for_text("Review")?);

        match review.validate() {
            Ok(_) => return Ok(()),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn print_detailed(evaluation: &DetailedEvaluation) {
    let who = if evaluation.employee_name.is_empty() {
        &evaluation.employee_id
    } else {
        &evaluation.employee_name
    };

    match &evaluation.period {
        Some(period) => println!("===== {} ({}) =====", who, period),
        None => println!("===== {} =====", who),
    }

    for (aspect, score) in &evaluation.aspects {
        println!("{:<20} {}", aspect, score);
    }

    if !evaluation.comment.is_empty() {
        println!("{}", evaluation.comment);
    }
}
