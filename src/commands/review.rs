/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use anyhow::Result;
use clap::Subcommand;
use connector::api::AgencyApi;
use connector::flow::CompanyReviewFlow;
use connector::gate::Route;
use connector::models::ReviewStats;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List,
    Create {
        #[arg(short, long)]
        rating: Option<u8>,
        #[arg(short, long)]
        comment: Option<String>,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    Stats,
}

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List => {
            let ctx = Context::open(Route::Reviews)?;
            let reviews = ctx.api.reviews().await?;

            if reviews.is_empty() {
                println!("No reviews yet.");
            }

            for review in reviews {
                println!(
                    "{:<10} {} {:<12} {}",
                    review.id,
                    stars(review.rating),
                    review.created_at.as_deref().unwrap_or("-"),
                    review.comment
                );
            }
        }

        Commands::Create { rating, comment } => {
            let ctx = Context::open(Route::CompanyReview)?;
            let mut review = CompanyReviewFlow::new(None);

            match (rating, comment) {
                (Some(rating), Some(comment)) => {
                    review.set_rating(rating);
                    review.set_comment(&comment);
                }
                _ => super::evaluation::ask_review(&mut review)?,
            }

            review.submit(&ctx.api).await?;
            println!("Thank you for your review.");
        }

        Commands::Delete { id, yes } => {
            let ctx = Context::open(Route::ReviewModeration)?;

            if !yes && !confirm(&format!("Delete review {}?", id))? {
                println!("Cancelled.");
                return Ok(());
            }

            ctx.api.delete_review(&id).await?;
            println!("Review deleted.");
        }

        Commands::Stats => {
            let ctx = Context::open(Route::ReviewStats)?;
            print_stats(&ctx.api.review_stats().await?);
        }
    }

    Ok(())
}

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "*".repeat(filled), ".".repeat(5 - filled))
}

fn print_stats(stats: &ReviewStats) {
    println!("Average: {:.1} / 5", stats.average_rating);
    println!("Reviews: {}", stats.total_reviews);

    let widest = stats.distribution.values().copied().max().unwrap_or(0).max(1);

    for rating in (1..=5u8).rev() {
        let count = stats.distribution.get(&rating).copied().unwrap_or(0);
        let width = (count * 20 / widest) as usize;
        println!("{} {:<20} {}", rating, "#".repeat(width), count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), ".....");
        assert_eq!(stars(3), "***..");
        assert_eq!(stars(9), "*****");
    }
}
