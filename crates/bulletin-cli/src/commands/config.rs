use crate::app::{resolve_config_path, resolve_store_path, AppContext};
use crate::config::{write_config, BulletinConfig};
use crate::errors::CliError;
use crate::ui::{header, kv, print, receipt};

/// `bulletin config init`: write a starter config pointing at the store.
pub fn handle_config_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = resolve_config_path()?;
    if path.exists() && !force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}; pass --force to overwrite",
            path.display()
        ))
        .into());
    }

    let store_path = resolve_store_path(ctx.cli().store.as_ref(), &BulletinConfig::default())?;
    write_config(&path, &BulletinConfig::starter(&store_path))?;
    tracing::debug!(path = %path.display(), "wrote config");

    if !ctx.quiet() {
        let ui = ctx.ui(false, None)?;
        let config_path = path.display().to_string();
        let store_path = store_path.display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Wrote config",
                &[("Config", config_path.as_str()), ("Store", store_path.as_str())],
            ),
        );
    }
    Ok(())
}

/// `bulletin config show`: effective settings after defaults and overrides.
pub fn handle_config_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let config = ctx.config()?;
    let store_path = ctx.store_path()?;
    let ui = ctx.ui(json, None)?;

    if ui.mode.is_json() {
        let value = serde_json::json!({
            "configPath": config_path,
            "configExists": config_path.exists(),
            "storePath": store_path,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "config", None));
    }
    let rows = [
        ("Config", config_path.display().to_string()),
        ("Store", store_path.display().to_string()),
        ("Page size", config.list.page_size.to_string()),
        ("Sort", config.list.sort.to_string()),
        (
            "Timezone",
            config.ui.timezone.clone().unwrap_or_else(|| "local".into()),
        ),
        (
            "Editor",
            config.ui.editor.clone().unwrap_or_else(|| "$EDITOR".into()),
        ),
    ];
    for (key, value) in rows {
        print(&ui, &kv(&ui, key, &value));
    }
    Ok(())
}
