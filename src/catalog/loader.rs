use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::CatalogError;
use crate::state::data::CatalogEntry;

/// Supported image extensions (compared case-insensitively)
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// The shuffled, fixed-order list of images rated in one session.
///
/// The order is decided once at load time and never changes afterwards;
/// callers keep the same `Catalog` for the whole survey.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Scan `root` and shuffle the result.
    ///
    /// With a seed the order is reproducible, otherwise it comes from OS entropy.
    pub fn load(root: &Path, seed: Option<u64>) -> Result<Self, CatalogError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::load_with_rng(root, &mut rng)
    }

    /// Scan `root` and shuffle with the given random source
    pub fn load_with_rng<R: Rng + ?Sized>(root: &Path, rng: &mut R) -> Result<Self, CatalogError> {
        let mut entries = scan_images(root)?;
        entries.shuffle(rng);

        info!("🖼️  Loaded {} images from {}", entries.len(), root.display());
        Ok(Self::from_entries(entries))
    }

    /// Build a catalog from entries that are already in presentation order
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

/// Async wrapper so the UI thread never blocks on a large directory tree
pub async fn load_catalog(root: PathBuf, seed: Option<u64>) -> Result<Catalog, CatalogError> {
    tokio::task::spawn_blocking(move || Catalog::load(&root, seed))
        .await
        .map_err(|e| CatalogError::Task(e.to_string()))?
}

/// Walk the directory tree recursively and collect supported images.
///
/// Entries come back in file-name order so a seeded shuffle is reproducible.
fn scan_images(root: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    // A missing or unreadable root is fatal; problems deeper in the tree are not
    std::fs::read_dir(root).map_err(|source| CatalogError::FileSystem {
        path: root.to_path_buf(),
        source,
    })?;

    debug!("🔍 Scanning folder: {}", root.display());

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("⚠️  Skipping unreadable entry: {}", err);
                continue;
            }
        };

        // Only process files (not directories)
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_supported_image(path) {
            continue;
        }

        entries.push(CatalogEntry {
            filename: entry.file_name().to_string_lossy().to_string(),
            path: path.to_string_lossy().to_string(),
        });
    }

    Ok(entries)
}

/// Check the extension against the supported list, ignoring case
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
