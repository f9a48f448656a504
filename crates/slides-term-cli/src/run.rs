use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use slides_term_candidates::CandidatePipeline;
use slides_term_methods::{RankingMethod, RankingToScoreDictConverter};
use slides_term_types::{DomainCandidates, DomainTermRanking, DomainTermScoreDict};
use tracing::info;

use crate::config::AppConfig;
use crate::io::{load_domains_from_dir, read_json, write_json};

/// Refines one raw domain file into candidates.
pub fn extract(config: &AppConfig, input: &Path, output: &Path) -> Result<DomainCandidates> {
    let raw: DomainCandidates = read_json(input)?;
    let pipeline = CandidatePipeline::new(&config.candidate);
    let candidates = pipeline.refine_domain(&raw);
    write_json(output, &candidates)?;
    info!("wrote candidates to {}", output.display());
    Ok(candidates)
}

/// Ranks every domain in `candidates_dir` and writes
/// `<output_dir>/<domain>/<method>.json` for each. Returns the written paths.
pub fn rank(config: &AppConfig, candidates_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let domains = load_domains_from_dir(candidates_dir)?;
    if domains.is_empty() {
        bail!("no candidate files found in {}", candidates_dir.display());
    }

    let method = RankingMethod::from_config(&config.method);
    let file_name = format!("{}.json", method.name());
    method
        .rank_domains(&domains)
        .iter()
        .map(|ranking| -> Result<PathBuf> {
            let path = output_dir.join(&ranking.domain).join(&file_name);
            write_json(&path, ranking)?;
            info!("wrote ranking to {}", path.display());
            Ok(path)
        })
        .collect()
}

/// Keeps the top share of one ranking file.
pub fn select(acceptance_rate: f64, ranking: &Path, output: &Path) -> Result<DomainTermScoreDict> {
    let converter = RankingToScoreDictConverter::new(acceptance_rate)?;
    let ranking: DomainTermRanking = read_json(ranking)?;
    let selected = converter.convert(&ranking);
    info!(
        "{}: accepted {} of {} terms",
        selected.domain,
        selected.term_scores.len(),
        ranking.len()
    );
    write_json(output, &selected)?;
    Ok(selected)
}
