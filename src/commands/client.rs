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
use connector::models::Profile;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short = 'q', long, default_value = "")]
        search: String,
        #[arg(short = 'o', long)]
        sort: Option<SortKey>,
    },
}

pub async fn handle(cmd: Commands) -> Result<()> {
    let ctx = Context::open(Route::Clients)?;

    match cmd {
        Commands::List { search, sort } => {
            let clients = ctx.api.clients().await?;
            warn_unsupported_sort::<Profile>(sort);

            let view = derive_view(&clients, &ListQuery::new("all", &search, sort));

            if view.is_empty() {
                println!("No clients match.");
            }

            for client in view {
                println!(
                    "{:<10} {:<28} {:<28} {:<16} {}",
                    client.id,
                    client.full_name,
                    client.email,
                    or_dash(&client.phone),
                    or_dash(&client.address),
                );
            }
        }
    }

    Ok(())
}
