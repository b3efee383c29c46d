use crate::conf::resolve_config;
use serde::Serialize;
use std::path::Path;

pub fn dump(path: Option<&Path>) -> anyhow::Result<()> {
    let cfg = resolve_config(path)?;
    dump_json(&cfg)
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}
