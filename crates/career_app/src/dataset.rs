use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use career_core::{Catalog, Job, Sector};
use career_logging::career_info;
use serde::Deserialize;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.ron");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    sectors: Vec<Sector>,
    jobs: Vec<Job>,
}

pub(crate) fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument = ron::from_str(text)?;
    Ok(Catalog::new(document.sectors, document.jobs))
}

/// Loads the catalog from `path`, or the bundled one when no path is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let catalog = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_catalog(&text)?
        }
        None => parse_catalog(BUNDLED_CATALOG)?,
    };
    career_info!(
        "Loaded catalog with {} sectors and {} jobs",
        catalog.sectors().len(),
        catalog.jobs().len()
    );
    Ok(catalog)
}
