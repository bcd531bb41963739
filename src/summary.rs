use handlebars::Handlebars;
use serde::Serialize;

use crate::host::HostConfig;

#[derive(Serialize)]
struct AliasRow {
    name: String,
    target: String,
}

#[derive(Serialize)]
struct SummaryCtx {
    version: String,
    rules: usize,
    aliases: Vec<AliasRow>,
}

/// Render a short human-readable account of a merged host configuration.
pub fn render_summary(host: &HostConfig) -> String {
    // Handlebars template for the merge summary.
    let tpl = r#"extpack v{{version}} merge summary
loader rules: {{rules}}
aliases:
{{#each aliases}}  {{name}} = {{target}}
{{/each}}"#;
    let mut hbs = Handlebars::new();
    let _ = hbs.register_template_string("summary", tpl);
    let ctx = SummaryCtx {
        version: env!("CARGO_PKG_VERSION").to_string(),
        rules: host.module.rules.len(),
        aliases: host
            .resolve
            .alias
            .iter()
            .map(|(name, target)| AliasRow {
                name: name.clone(),
                target: target.clone(),
            })
            .collect(),
    };
    hbs.render("summary", &ctx)
        .unwrap_or_else(|_| tpl.to_string())
}
