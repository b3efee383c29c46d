use crate::conf::resolve_config;
use std::path::Path;

pub fn check(path: Option<&Path>) -> anyhow::Result<()> {
    let cfg = resolve_config(path)?;

    println!("✔ Config loaded successfully");
    println!("✔ bot filter: {:?}", cfg.parse.bot_filter);
    println!(
        "✔ lines without a User-Agent are {}",
        if cfg.parse.skip_missing_user_agent {
            "skipped"
        } else {
            "classified"
        }
    );
    println!("✔ report format: {:?}", cfg.report.format);

    Ok(())
}
