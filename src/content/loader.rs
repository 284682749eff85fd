//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::Catalog;

pub const ANIMALS_FILE: &str = "animals.ron";
pub const QUIZ_DEFAULTS_FILE: &str = "quiz_defaults.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub fn parse_single_file<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Build a catalog from parsed animals, reporting every repeated id.
pub fn build_catalog(
    file_name: &str,
    animals: Vec<AnimalDef>,
) -> Result<Catalog, Vec<ContentLoadError>> {
    let mut catalog = Catalog::default();
    let mut errors = Vec::new();

    for animal in animals {
        let id = animal.id.clone();
        if !catalog.insert(animal) {
            errors.push(ContentLoadError {
                file: file_name.to_string(),
                message: format!("duplicate animal id '{}'", id),
            });
        }
    }

    if errors.is_empty() {
        Ok(catalog)
    } else {
        Err(errors)
    }
}

/// Load all content from assets/data/*.ron into a Catalog.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<(Catalog, QuizDefaults), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let animals_path = base_path.join(ANIMALS_FILE);
    let animals_name = animals_path.display().to_string();
    let catalog = match read_file(&animals_path)
        .and_then(|contents| parse_data_file::<AnimalDef>(&animals_name, &contents))
    {
        Ok(animals) => match build_catalog(&animals_name, animals) {
            Ok(catalog) => Some(catalog),
            Err(mut duplicates) => {
                errors.append(&mut duplicates);
                None
            }
        },
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let defaults_path = base_path.join(QUIZ_DEFAULTS_FILE);
    let defaults_name = defaults_path.display().to_string();
    let quiz_defaults = match read_file(&defaults_path)
        .and_then(|contents| parse_single_file::<QuizDefaults>(&defaults_name, &contents))
    {
        Ok(defaults) => Some(defaults),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match (catalog, quiz_defaults) {
        (Some(catalog), Some(quiz_defaults)) if errors.is_empty() => Ok((catalog, quiz_defaults)),
        _ => Err(errors),
    }
}
