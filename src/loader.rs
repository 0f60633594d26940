// JSON input files -> typed values.
//
// Embeddings are an object of `"word": [f64, ...]`; word sets follow the
// `WeatTest` layout; answer keys and responses are `"question": "answer"`
// objects. Validation errors from the embedding space surface with the file
// path attached.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::accuracy::Answers;
use crate::association::{EmbeddingSpace, WeatTest};

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {what} file {}", path.display()))
}

/// Load an embedding space. Ragged or non-finite vectors are rejected here.
pub fn load_embeddings(path: &Path) -> Result<EmbeddingSpace> {
    let space: EmbeddingSpace = read_json(path, "embeddings")?;
    info!(
        words = space.len(),
        dim = space.dimension(),
        "Loaded embeddings from {}",
        path.display()
    );
    Ok(space)
}

/// Load the four word sets of a test.
pub fn load_word_sets(path: &Path) -> Result<WeatTest> {
    let test: WeatTest = read_json(path, "word sets")?;
    debug!(
        x = test.target_x.len(),
        y = test.target_y.len(),
        a = test.attribute_a.len(),
        b = test.attribute_b.len(),
        "Loaded word sets from {}",
        path.display()
    );
    Ok(test)
}

/// Load a question -> answer map (answer key or a group's responses).
pub fn load_answers(path: &Path) -> Result<Answers> {
    let answers: Answers = read_json(path, "answers")?;
    debug!(questions = answers.len(), "Loaded answers from {}", path.display());
    Ok(answers)
}

/// Split a `NAME=PATH` group argument.
pub fn parse_group_arg(arg: &str) -> Result<(String, PathBuf)> {
    match arg.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path.trim())))
        }
        _ => anyhow::bail!("Expected a group as NAME=PATH, got {arg:?}"),
    }
}
