use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Documents loaded from a directory, one per file, sorted by file name.
pub struct Corpus {
    pub names: Vec<String>,
    pub texts: Vec<String>,
}

impl Corpus {
    pub fn load_dir<P>(dir: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        let mut paths: Vec<PathBuf> = vec![];
        let entries =
            fs::read_dir(dir).with_context(|| format!("Failed to open {}", dir.display()))?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            paths.push(entry.path());
        }
        paths.sort();

        let mut names = Vec::with_capacity(paths.len());
        let mut texts = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            names.push(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            texts.push(text);
        }
        Ok(Self { names, texts })
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }
}

pub fn load_stopwords<P>(path: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stopwords from {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}
