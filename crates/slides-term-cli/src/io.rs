use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use slides_term_types::DomainCandidates;
use tracing::debug;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

/// Pretty-prints `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}

/// Loads every `*.json` domain file in `dir`, skipping hidden files, in path
/// order.
///
/// Domain names become output directory names, so each must be a single
/// non-hidden path component and unique within `dir`.
pub fn load_domains_from_dir(dir: &Path) -> Result<Vec<DomainCandidates>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))? {
        let path = entry.with_context(|| format!("list {}", dir.display()))?.path();
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if path.is_file() && is_json && !hidden {
            paths.push(path);
        }
    }
    paths.sort();

    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut domains = Vec::with_capacity(paths.len());
    for path in paths {
        let domain: DomainCandidates = read_json(&path)?;
        check_domain_name(&domain.domain, &path)?;
        if let Some(first) = seen.get(&domain.domain) {
            bail!(
                "domain `{}` is declared by both {} and {}",
                domain.domain,
                first.display(),
                path.display()
            );
        }
        debug!(
            "loaded domain {} ({} documents) from {}",
            domain.domain,
            domain.num_documents(),
            path.display()
        );
        seen.insert(domain.domain.clone(), path);
        domains.push(domain);
    }
    Ok(domains)
}

fn check_domain_name(name: &str, path: &Path) -> Result<()> {
    let invalid = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\', '\0'])
        || Path::new(name).components().count() != 1;
    if invalid {
        bail!(
            "invalid domain name `{}` in {}: expected a single non-hidden path component",
            name,
            path.display()
        );
    }
    Ok(())
}
