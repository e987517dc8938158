use crate::catalog::{seed_recipes, Recipe};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "recipes.json";

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_store_dir() -> PathBuf {
    home_dir().join(".skillet")
}

#[derive(Debug)]
pub enum StoreError {
    Read(String),
    Parse(String),
    Write(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(message) => write!(f, "failed to read recipe store: {message}"),
            Self::Parse(message) => write!(f, "failed to parse recipe store: {message}"),
            Self::Write(message) => write!(f, "failed to write recipe store: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// File-backed adapter for the recipe collection. The whole collection is one
/// JSON document under a fixed name; there are no partial writes.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Self {
        Self::new(default_store_dir().join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored collection. A missing blob yields the seed
    /// collection; a present but unreadable or malformed blob is an error
    /// for the caller to surface.
    pub fn load(&self) -> Result<Vec<Recipe>, StoreError> {
        if !self.path.exists() {
            return Ok(seed_recipes());
        }

        let data = fs::read(&self.path)
            .map_err(|err| StoreError::Read(format!("{}: {err}", self.path.display())))?;
        serde_json::from_slice(&data)
            .map_err(|err| StoreError::Parse(format!("{}: {err}", self.path.display())))
    }

    /// Serializes the entire collection and replaces the blob. The write
    /// goes through a temp file and a rename, with a remove-then-rename
    /// fallback where rename cannot replace an existing file.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .map_err(|err| StoreError::Write(format!("{}: {err}", dir.display())))?;

        let tmp_path = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(recipes)
            .map_err(|err| StoreError::Write(err.to_string()))?;

        fs::write(&tmp_path, bytes)
            .map_err(|err| StoreError::Write(format!("{}: {err}", tmp_path.display())))?;
        match fs::rename(&tmp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                if self.path.exists() {
                    fs::remove_file(&self.path)
                        .map_err(|err| StoreError::Write(format!("{}: {err}", self.path.display())))?;
                    fs::rename(&tmp_path, &self.path)
                        .map_err(|err| StoreError::Write(format!("{}: {err}", self.path.display())))?;
                    Ok(())
                } else {
                    Err(StoreError::Write(format!(
                        "{}: {rename_err}",
                        self.path.display()
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RecipeStore, StoreError};
    use crate::catalog::seed_recipes;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "skillet_store_{prefix}_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn missing_blob_loads_the_seed_collection() {
        let store = RecipeStore::new(temp_path("missing"));

        let recipes = store.load().expect("missing blob should yield the seed");
        assert_eq!(recipes, seed_recipes());
    }

    #[test]
    fn saved_collection_round_trips() {
        let path = temp_path("round_trip");
        let store = RecipeStore::new(path.clone());
        let mut recipes = seed_recipes();
        recipes[0].title = "Blueberry Pancakes".to_string();

        store.save(&recipes).expect("collection should save");
        let loaded = store.load().expect("saved collection should load");
        assert_eq!(loaded, recipes);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_blob_is_a_parse_error() {
        let path = temp_path("malformed");
        fs::write(&path, b"{ not json").expect("malformed fixture should write");
        let store = RecipeStore::new(path.clone());

        let error = store.load().expect_err("malformed blob should fail to load");
        assert!(matches!(error, StoreError::Parse(_)));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_overwrites_the_previous_blob() {
        let path = temp_path("overwrite");
        let store = RecipeStore::new(path.clone());
        let recipes = seed_recipes();

        store.save(&recipes).expect("first save should succeed");
        store
            .save(&recipes[..1])
            .expect("second save should succeed");

        let loaded = store.load().expect("overwritten blob should load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Pancakes");

        let _ = fs::remove_file(path);
    }
}
