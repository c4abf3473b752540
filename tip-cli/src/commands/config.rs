//! `config`: show and change persisted preferences.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use tip_core::storage::{load_rounding, load_theme, save_rounding, save_theme};
use tip_core::{StateStore, Theme};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the stored preferences.
    Show,
    /// Set the display theme.
    Theme(ThemeArgs),
    /// Set whether tips round up to the next dollar by default.
    Rounding(RoundingArgs),
}

#[derive(Debug, Parser)]
pub struct ThemeArgs {
    /// `light` or `dark`.
    pub theme: String,
}

#[derive(Debug, Parser)]
pub struct RoundingArgs {
    /// `on` or `off`.
    pub rounding: String,
}

pub async fn run(store: &dyn StateStore, command: ConfigCommand) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Show => show(store).await,
        ConfigCommand::Theme(args) => set_theme(store, &args.theme).await,
        ConfigCommand::Rounding(args) => set_rounding(store, &args.rounding).await,
    }
}

async fn show(store: &dyn StateStore) -> anyhow::Result<()> {
    let theme = load_theme(store).await;
    let rounding = load_rounding(store).await;

    println!("theme     {}", theme.as_str());
    println!("round up  {}", on_off(rounding));
    Ok(())
}

async fn set_theme(store: &dyn StateStore, raw: &str) -> anyhow::Result<()> {
    let Some(theme) = Theme::parse(raw) else {
        bail!("unknown theme '{raw}' (expected light or dark)");
    };

    save_theme(store, theme)
        .await
        .context("could not save the theme")?;
    println!("Theme set to {}.", theme.as_str());
    Ok(())
}

async fn set_rounding(store: &dyn StateStore, raw: &str) -> anyhow::Result<()> {
    let round_up = match raw {
        "on" => true,
        "off" => false,
        other => bail!("expected on or off, got '{other}'"),
    };

    save_rounding(store, round_up)
        .await
        .context("could not save the rounding preference")?;
    println!("Round-up tips {}.", on_off(round_up));
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use tip_core::storage::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn setting_the_theme_persists_it() {
        let store = MemoryStore::new();

        run(
            &store,
            ConfigCommand::Theme(ThemeArgs {
                theme: "dark".to_string(),
            }),
        )
        .await
        .expect("Failed to set the theme");

        assert_eq!(load_theme(&store).await, Theme::Dark);
    }

    #[tokio::test]
    async fn an_unknown_theme_is_rejected_and_nothing_is_stored() {
        let store = MemoryStore::new();

        let result = run(
            &store,
            ConfigCommand::Theme(ThemeArgs {
                theme: "sepia".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(load_theme(&store).await, Theme::Light);
    }

    #[tokio::test]
    async fn setting_rounding_persists_the_flag() {
        let store = MemoryStore::new();

        run(
            &store,
            ConfigCommand::Rounding(RoundingArgs {
                rounding: "on".to_string(),
            }),
        )
        .await
        .expect("Failed to set rounding");

        assert!(load_rounding(&store).await);
    }

    #[tokio::test]
    async fn rounding_only_accepts_on_or_off() {
        let store = MemoryStore::new();

        let result = run(
            &store,
            ConfigCommand::Rounding(RoundingArgs {
                rounding: "maybe".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        assert!(!load_rounding(&store).await);
    }

    #[test]
    fn on_off_spells_both_states() {
        assert_eq!(on_off(true), "on");
        assert_eq!(on_off(false), "off");
    }
}
