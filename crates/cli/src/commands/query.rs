use anyhow::{Context, Result, bail};
use dinefind_service::{RecommendParams, RecommendService};
use std::path::Path;

fn load_service(data_path: &Path) -> Result<RecommendService> {
    RecommendService::load(data_path)
        .with_context(|| format!("failed to load restaurant table from {}", data_path.display()))
}

pub(crate) async fn run_query(data_path: &Path, params: RecommendParams) -> Result<()> {
    let service = load_service(data_path)?;
    let outcome = service.recommend_params(params).await?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    if outcome.is_error() {
        bail!("query failed");
    }
    Ok(())
}

pub(crate) fn run_stats(data_path: &Path) -> Result<()> {
    let service = load_service(data_path)?;
    println!("{}", serde_json::to_string_pretty(&service.stats())?);
    Ok(())
}
