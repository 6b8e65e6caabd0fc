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
use connector::error::ConnectorError;
use connector::gate::Route;
use connector::models::*;

#[derive(Subcommand, Debug)]
pub enum Commands {
    Show,
    /// Replace the whole profile; fields left out keep their current value
    Edit {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        address: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

pub async fn handle(cmd: Commands) -> Result<()> {
    let ctx = Context::open(Route::Profile)?;
    let role = ctx.session.role;

    match cmd {
        Commands::Show => print_profile(&ctx.api.profile(role).await?),

        Commands::Edit {
            name,
            email,
            phone,
            address,
            avatar_url,
        } => {
            let current = ctx.api.profile(role).await?;
            let mut update = ProfileUpdate::from(&current);
            let interactive = [&name, &email, &phone, &address, &avatar_url]
                .iter()
                .all(|v| v.is_none());

            if interactive {
                update.full_name = ask_with_default("Full name", &update.full_name)?;
                update.email = ask_with_default("Email", &update.email)?;
                update.phone = ask_with_default("Phone", &update.phone)?;
                update.address = ask_with_default("Address", &update.address)?;
            } else {
                update.full_name = name.unwrap_or(update.full_name);
                update.email = email.unwrap_or(update.email);
                update.phone = phone.unwrap_or(update.phone);
                update.address = address.unwrap_or(update.address);
                update.avatar_url = avatar_url.or(update.avatar_url);
            }

            validate(&update)?;
            let saved = ctx.api.replace_profile(role, &update).await?;
            println!("Profile saved.");
            print_profile(&saved);
        }
    }

    Ok(())
}

fn validate(update: &ProfileUpdate) -> Result<(), ConnectorError> {
    if update.full_name.trim().is_empty() {
        return Err(ConnectorError::validation("Full name cannot be empty."));
    }

    if !update.email.contains('@') {
        return Err(ConnectorError::validation("Email address is not valid."));
    }

    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("Name: {}", or_dash(&profile.full_name));
    println!("Email: {}", or_dash(&profile.email));
    println!("Phone: {}", or_dash(&profile.phone));
    println!("Address: {}", or_dash(&profile.address));

    if let Some(avatar) = &profile.avatar_url {
        println!("Avatar: {}", avatar);
    }
}
