use crate::errors::{CatalogError, QuizError};
use models::{HeritageSite, SiteRecord};
use rand::Rng;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod models;
#[cfg(test)]
pub mod tests;

static BUNDLED_CATALOG: &str = include_str!("heritage_sites.json");

/// Read-only list of quiz targets, indexed `0..len()`.
#[derive(Clone, Debug, Default)]
pub struct SiteCatalog {
    sites: Vec<HeritageSite>,
}

impl SiteCatalog {
    pub fn new(sites: Vec<HeritageSite>) -> Self {
        SiteCatalog { sites }
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// Loads a catalog file. `.ndjson` files hold one record per line,
    /// anything else is expected to be a JSON array of records.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let io_error = |source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        let catalog = if path.extension().is_some_and(|ext| ext == "ndjson") {
            let file = File::open(path).map_err(io_error)?;
            Self::from_ndjson_reader(BufReader::new(file), path)?
        } else {
            let raw = fs::read_to_string(path).map_err(io_error)?;
            Self::from_json_str(&raw)?
        };
        tracing::info!(
            task = "catalog_loaded",
            path = %path.display(),
            sites_count = catalog.len(),
        );
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<SiteRecord> =
            serde_json::from_str(raw).map_err(|source| CatalogError::Json {
                line: source.line(),
                source,
            })?;
        Self::from_records(records)
    }

    pub fn from_ndjson_reader(reader: impl BufRead, path: &Path) -> Result<Self, CatalogError> {
        let mut records = Vec::new();
        for (line_index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let record: SiteRecord =
                serde_json::from_str(&line).map_err(|source| CatalogError::Json {
                    line: line_index + 1,
                    source,
                })?;
            records.push(record);
        }
        Self::from_records(records)
    }

    fn from_records(records: Vec<SiteRecord>) -> Result<Self, CatalogError> {
        let sites = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                HeritageSite::try_from(record)
                    .map_err(|source| CatalogError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SiteCatalog::new(sites))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HeritageSite> {
        self.sites.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeritageSite> {
        self.sites.iter()
    }

    /// Uniform over the whole catalog on every call, repeats included.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, QuizError> {
        if self.sites.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }
        Ok(rng.gen_range(0..self.sites.len()))
    }
}
