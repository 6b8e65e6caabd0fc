/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::config::*;
use anyhow::{Context as _, Result, bail};
use connector::RequestConfig;
use connector::session::SessionStore;
use rpassword::read_password;
use std::io::{self, Write};

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .with_context(|| format!("Failed to read {}.", prompt.trim_end_matches([':', ' '])))?;

    Ok(inp.trim().to_string())
}

pub fn ask_for_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let inp = read_password().context("Failed to read password.")?;

    if inp.is_empty() {
        bail!("Password cannot be empty.");
    }

    Ok(inp)
}

pub fn ask_for_input(prompt: &str) -> Result<String> {
    let inp = read_line(&format!("{}: ", prompt))?;

    if inp.is_empty() {
        bail!("{} cannot be empty.", prompt);
    }

    Ok(inp)
}

/// Like [`ask_for_input`], but an empty answer keeps `current`.
pub fn ask_with_default(prompt: &str, current: &str) -> Result<String> {
    let inp = read_line(&format!("{} [{}]: ", prompt, current))?;

    if inp.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(inp)
    }
}

/// Free text that may stay empty.
pub fn ask_for_text(prompt: &str) -> Result<String> {
    read_line(&format!("{}: ", prompt))
}

pub fn confirm(prompt: &str) -> Result<bool> {
    let inp = read_line(&format!("{} [y/N]: ", prompt))?;
    Ok(is_yes(&inp))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "ya")
}

pub fn get_request_config(file: &ConfigFile) -> Result<RequestConfig> {
    let server_url = match file.get(ConfigKey::Server)? {
        Some(server_url) => server_url,
        None => bail!("Server URL not set. Use `agency config server <url>` to set it."),
    };

    let token = file.load()?.token().map(str::to_string);

    Ok(RequestConfig { server_url, token })
}
