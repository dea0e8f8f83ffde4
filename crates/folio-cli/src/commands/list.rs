use anyhow::Context;
use folio_config::FolioConfig;
use folio_gallery::Page;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `folio list`.
pub async fn handle(config: &FolioConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = Page::from_config(config).context("failed to set up gallery page")?;
    let outcome = page.load().await;
    output(&outcome, flags.format)
}
