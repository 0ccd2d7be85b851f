// profile-core-client/profile-dashboard-cli
//
// Copyright: 2024, The profile-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::info;
use tracing_subscriber::EnvFilter;

use profile_core_client::{ProfileChanges, ProfileStore, ProfileStoreConfig, UserId};

use crate::profile_display::ProfileCard;

mod profile_display;

fn enable_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("profile_core_client=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn select_command() -> Selection {
    let options: Vec<Selection> = Selection::iter().collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .default(0)
        .items(&options[..])
        .interact()
        .ok();

    let Some(selection) = selection else {
        return Selection::Noop;
    };

    println!();
    options[selection].clone()
}

fn prompt_user_id(default: &UserId) -> Result<UserId> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter user id")
        .validate_with(|input: &String| UserId::from_str(input).map(|_| ()))
        .default(default.to_string())
        .interact_text()?;
    println!();
    Ok(UserId::from_str(&input)?)
}

fn prompt_string(prompt: &str) -> Result<String> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    println!();
    Ok(input)
}

async fn load_profile(store: &ProfileStore, user_id: &UserId, force_refresh: bool) {
    println!("Loading profile for user {}…", user_id);

    match store.fetch_profile(user_id, force_refresh).await {
        Ok(profile) => println!("{}", ProfileCard(&profile)),
        Err(err) => println!("{}", err),
    }
}

async fn update_profile(store: &ProfileStore, user_id: &UserId) -> Result<()> {
    let mut changes = ProfileChanges::new();

    for (field, prompt) in [
        ("name", "Name (leave empty to keep)"),
        ("email", "Email (leave empty to keep)"),
        ("phone", "Phone (leave empty to keep)"),
    ] {
        let value = prompt_string(prompt)?;
        if !value.trim().is_empty() {
            changes.set(field, value.trim());
        }
    }

    if changes.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    if let Err(err) = store.update_profile(user_id, &changes).await {
        println!("{}", err);
    }
    Ok(())
}

fn show_cached_profile(store: &ProfileStore, user_id: &UserId) {
    match store.cached_profile(user_id) {
        Some(profile) => println!("{}", ProfileCard(&profile)),
        None => println!("No cached profile for user {}.", user_id),
    }
}

#[derive(EnumIter, Display, Clone)]
enum Selection {
    #[strum(serialize = "Load profile")]
    LoadProfile,
    #[strum(serialize = "Refresh profile")]
    RefreshProfile,
    #[strum(serialize = "Show cached profile")]
    ShowCachedProfile,
    #[strum(serialize = "Update profile")]
    UpdateProfile,
    #[strum(serialize = "Invalidate profile")]
    InvalidateProfile,
    #[strum(serialize = "Invalidate all profiles")]
    InvalidateAll,
    #[strum(serialize = "Noop")]
    Noop,
    #[strum(serialize = "Exit")]
    Exit,
}

#[tokio::main]
async fn main() -> Result<()> {
    _ = dotenvy::dotenv();
    enable_logging();

    let config = ProfileStoreConfig::from_env()?;
    info!(base_url = %config.base_url, demo_user_id = %config.demo_user_id, "Starting dashboard");

    let store = ProfileStore::builder().set_config(config).build()?;
    let demo_user_id = store.config().demo_user_id;

    let subscription = store.subscribe(|profile| {
        println!("\n{}", ProfileCard(profile));
        Ok(())
    });

    load_profile(&store, &demo_user_id, false).await;

    loop {
        println!();

        match select_command() {
            Selection::LoadProfile => {
                let user_id = prompt_user_id(&demo_user_id)?;
                load_profile(&store, &user_id, false).await;
            }
            Selection::RefreshProfile => {
                let user_id = prompt_user_id(&demo_user_id)?;
                load_profile(&store, &user_id, true).await;
            }
            Selection::ShowCachedProfile => {
                let user_id = prompt_user_id(&demo_user_id)?;
                show_cached_profile(&store, &user_id);
            }
            Selection::UpdateProfile => {
                let user_id = prompt_user_id(&demo_user_id)?;
                update_profile(&store, &user_id).await?;
            }
            Selection::InvalidateProfile => {
                let user_id = prompt_user_id(&demo_user_id)?;
                store.invalidate(Some(&user_id));
            }
            Selection::InvalidateAll => store.invalidate(None),
            Selection::Noop => {}
            Selection::Exit => break,
        }
    }

    subscription.dispose();
    store.dispose();

    Ok(())
}
