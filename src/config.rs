use std::path::Path;

use anyhow::{Context, Result};
use config as cfg;
use serde::Deserialize;

use crate::options::OptionOverrides;

#[derive(Debug, Default, Deserialize, Clone)]
struct RootConfig {
    pub plugin: Option<OptionOverrides>,
}

/// Load plugin options from a file (explicit path, or auto-discovered
/// `extpack.{toml,yaml,yml,json}` in the working directory), with an
/// `EXTPACK`-prefixed environment overlay. Absent file means defaults.
pub fn load_options(explicit: Option<&Path>) -> Result<OptionOverrides> {
    if let Some(p) = explicit {
        return load_from_path(p);
    }
    let cwd = std::env::current_dir()?;
    let candidates = [
        "extpack.toml",
        "extpack.yaml",
        "extpack.yml",
        "extpack.json",
    ];
    for name in &candidates {
        let path = cwd.join(name);
        if path.is_file() {
            return load_from_path(&path);
        }
    }
    Ok(OptionOverrides::default())
}

fn load_from_path(path: &Path) -> Result<OptionOverrides> {
    let builder = cfg::Config::builder().add_source(cfg::File::from(path));
    // Optional environment overlay: EXTPACK_PLUGIN_TYPE etc.
    let builder = builder.add_source(cfg::Environment::with_prefix("EXTPACK").separator("_"));
    let conf = builder.build()?;
    let root = conf
        .try_deserialize::<RootConfig>()
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    Ok(root.plugin.unwrap_or_default())
}
