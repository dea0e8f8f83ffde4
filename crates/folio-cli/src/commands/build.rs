use anyhow::Context;
use folio_config::FolioConfig;
use folio_gallery::Page;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct BuildResponse {
    out: String,
    loaded: usize,
    dropped: usize,
    rendered: bool,
}

/// Handle `folio build`.
pub async fn handle(
    args: &BuildArgs,
    config: &FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = Page::from_config(config).context("failed to set up gallery page")?;
    let view = page.on_load().await;

    let Some(out) = &args.out else {
        print!("{}", view.html);
        return Ok(());
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, &view.html)
        .with_context(|| format!("failed to write {}", out.display()))?;
    tracing::info!(out = %out.display(), "wrote gallery page");

    let (loaded, dropped) = view
        .outcome
        .as_ref()
        .map_or((0, 0), |outcome| (outcome.projects().len(), outcome.dropped()));
    output(
        &BuildResponse {
            out: out.display().to_string(),
            loaded,
            dropped,
            rendered: view.outcome.is_some(),
        },
        flags.format,
    )
}
