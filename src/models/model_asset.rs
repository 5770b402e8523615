use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;

use crate::errors::AppError;

/// URL prefix the asset directory is served under.
pub const MODELS_URL_PREFIX: &str = "/assets/models";

/// Largest accepted upload body.
pub const MAX_MODEL_BYTES: usize = 50 * 1024 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &[".glb", ".gltf"];

/// A 3D model file available for embedding in slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelAsset {
    pub name: String,
    pub url: String,
}

impl ModelAsset {
    fn from_name(name: String) -> Self {
        let url = format!("{MODELS_URL_PREFIX}/{name}");
        ModelAsset { name, url }
    }
}

/// Lowercased extension including the dot, if it is an allowed model type.
fn model_extension(filename: &str) -> Option<String> {
    let dot = filename.rfind('.')?;
    let ext = filename[dot..].to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Replace every non-alphanumeric character with `-` and lowercase the rest.
pub fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

/// Storage filename for an upload: sanitized stem plus the lowercased
/// extension. An empty stem is replaced by the current millisecond timestamp.
pub fn storage_name(filename: &str) -> Result<String, AppError> {
    let ext = model_extension(filename)
        .ok_or_else(|| AppError::Validation("Invalid file type, expected .glb or .gltf".to_string()))?;
    let stem = &filename[..filename.len() - ext.len()];
    // Only the final path component counts.
    let stem = stem.rsplit(['/', '\\']).next().unwrap_or("");
    let stem = if stem.is_empty() {
        chrono::Utc::now().timestamp_millis().to_string()
    } else {
        sanitize_stem(stem)
    };
    Ok(format!("{stem}{ext}"))
}

/// Directory of uploaded `.glb`/`.gltf` files.
#[derive(Debug, Clone)]
pub struct ModelStore {
    base_path: PathBuf,
}

impl ModelStore {
    pub async fn new(base_path: PathBuf) -> Result<Self, AppError> {
        fs::create_dir_all(&base_path).await?;
        log::info!("Model store at {}", base_path.display());
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a stored model name to its path, refusing anything that could
    /// leave the base directory.
    fn safe_path(&self, name: &str) -> Result<PathBuf, AppError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(AppError::Validation("Invalid model name".to_string()));
        }
        Ok(self.base_path.join(name))
    }

    /// All model files, sorted by name. A missing directory lists as empty.
    pub async fn list(&self) -> Result<Vec<ModelAsset>, AppError> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if model_extension(name).is_some() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names.into_iter().map(ModelAsset::from_name).collect())
    }

    pub async fn upload(&self, filename: &str, data: &[u8]) -> Result<ModelAsset, AppError> {
        let name = storage_name(filename)?;
        if data.is_empty() {
            return Err(AppError::Validation("No file".to_string()));
        }
        let path = self.safe_path(&name)?;
        fs::write(&path, data).await?;
        log::info!("Stored model {} ({} bytes)", name, data.len());
        Ok(ModelAsset::from_name(name))
    }

    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        let path = self.safe_path(name)?;
        if model_extension(name).is_none() || !fs::try_exists(&path).await? {
            return Err(AppError::NotFound("Model".to_string()));
        }
        fs::remove_file(&path).await?;
        log::info!("Deleted model {name}");
        Ok(())
    }
}
