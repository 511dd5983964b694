//! Shop CLI commands: list, show, add, remove, modify, whoami.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use shoplinker_types::shop::{CreateShopRequest, OwnerId, Shop, ShopField};

use crate::state::AppState;

/// List all shops in insertion order.
pub fn list_shops(state: &AppState, json: bool) -> Result<()> {
    let shops = state.shop_service.list_shops();

    if json {
        println!("{}", serde_json::to_string_pretty(&shops)?);
        return Ok(());
    }

    if shops.is_empty() {
        println!();
        println!(
            "  {} No shops registered yet. Add one with: {}",
            style("i").blue().bold(),
            style("shoplink add <name> <description> [url]").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Description").fg(Color::White),
        Cell::new("Link").fg(Color::White),
    ]);

    for shop in &shops {
        let link = if shop.has_link() {
            Cell::new(&shop.url).fg(Color::Blue)
        } else {
            Cell::new("no link").fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(&shop.name).fg(Color::Cyan),
            Cell::new(truncate(&shop.description, 60)),
            link,
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} shop{}",
        style(shops.len()).bold(),
        if shops.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one shop in full.
pub fn show_shop(state: &AppState, name: &str, json: bool) -> Result<()> {
    let shop = state.shop_service.get_shop(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&shop)?);
        return Ok(());
    }

    print_shop(&shop);
    Ok(())
}

/// Register a new shop owned by the acting player.
pub fn add_shop(
    state: &AppState,
    actor: Option<OwnerId>,
    name: String,
    description: String,
    url: Option<String>,
    json: bool,
) -> Result<()> {
    let actor = state.actor(actor)?;
    let request = CreateShopRequest {
        name,
        description,
        url,
    };

    let shop = state.shop_service.create_shop(&actor, request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&shop)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Shop '{}' added.",
        style("✓").green().bold(),
        style(&shop.name).cyan()
    );
    print_shop(&shop);
    Ok(())
}

/// Remove a shop, asking for confirmation unless `force` is set.
pub fn remove_shop(
    state: &AppState,
    actor: Option<OwnerId>,
    name: &str,
    force: bool,
    json: bool,
) -> Result<()> {
    let actor = state.actor(actor)?;
    let shop = state.shop_service.managed_shop(&actor, name)?;

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove shop '{}'?",
                style(&shop.name).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let removed = state.shop_service.remove_shop(&actor, name)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "removed": removed.name,
            }))?
        );
        return Ok(());
    }

    println!();
    println!(
        "  {} Shop '{}' removed.",
        style("✓").green().bold(),
        style(&removed.name).cyan()
    );
    println!();
    Ok(())
}

/// Change one field of a shop.
pub fn modify_shop(
    state: &AppState,
    actor: Option<OwnerId>,
    shop_name: &str,
    field: ShopField,
    value: &str,
    json: bool,
) -> Result<()> {
    let actor = state.actor(actor)?;
    let shop = state
        .shop_service
        .modify_shop(&actor, shop_name, field, value)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&shop)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Shop '{}' updated: {} is now '{}'.",
        style("✓").green().bold(),
        style(shop_name).cyan(),
        style(field).bold(),
        value
    );
    println!();
    Ok(())
}

/// Print the acting identity and whether it is an operator.
pub fn whoami(state: &AppState, actor: Option<OwnerId>, json: bool) -> Result<()> {
    let actor = state.actor(actor)?;
    let owned: Vec<String> = state
        .shop_service
        .list_shops()
        .into_iter()
        .filter(|s| s.owner() == actor.id)
        .map(|s| s.name)
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": actor.id.to_string(),
                "operator": actor.elevated,
                "shops": owned,
            }))?
        );
        return Ok(());
    }

    println!();
    println!("  {}  {}", style("ID:").bold(), style(actor.id).cyan());
    println!(
        "  {}  {}",
        style("Role:").bold(),
        if actor.elevated { "operator" } else { "player" }
    );
    println!(
        "  {}  {}",
        style("Shops:").bold(),
        if owned.is_empty() {
            style("none".to_string()).dim().to_string()
        } else {
            owned.join(", ")
        }
    );
    println!();
    Ok(())
}

fn print_shop(shop: &Shop) {
    println!();
    println!("  {}  {}", style("Name:").bold(), style(&shop.name).cyan());
    println!("  {}  {}", style("Description:").bold(), shop.description);
    if shop.has_link() {
        println!(
            "  {}  {}",
            style("Link:").bold(),
            style(&shop.url).blue().underlined()
        );
    } else {
        println!("  {}  {}", style("Link:").bold(), style("no link").dim());
    }
    println!(
        "  {}  {}",
        style("Owner:").bold(),
        style(shop.owner().to_string()).dim()
    );
    println!();
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
