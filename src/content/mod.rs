//! Content domain: animal catalog and quiz defaults loaded from RON data files.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{AnimalDef, AnimalGroup, DataFile, Habitat, QuizDefaults};
pub use loader::{
    ANIMALS_FILE, ContentLoadError, QUIZ_DEFAULTS_FILE, build_catalog, load_all_content,
    parse_data_file, parse_single_file,
};
pub use registry::{Catalog, Collection};
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;

use crate::core::QuizConfig;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Catalog>()
            .init_resource::<QuizDefaults>()
            .add_systems(PreStartup, load_content);
    }
}

/// Loads the catalog and defaults from the configured data directory.
/// Leaves the catalog empty if anything fails to load or validate.
pub fn load_content(
    config: Res<QuizConfig>,
    mut catalog: ResMut<Catalog>,
    mut defaults: ResMut<QuizDefaults>,
) {
    let (loaded_catalog, loaded_defaults) = match load_all_content(&config.data_dir) {
        Ok(content) => content,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            error!(
                "Content loading failed with {} error(s); catalog left empty",
                errors.len()
            );
            return;
        }
    };

    let validation_errors = validate_content(&loaded_catalog);
    if !validation_errors.is_empty() {
        for e in &validation_errors {
            error!("{}", e);
        }
        error!(
            "Content validation failed with {} error(s); catalog left empty",
            validation_errors.len()
        );
        return;
    }

    info!("{}", loaded_catalog.summary());
    *catalog = loaded_catalog;
    *defaults = loaded_defaults;
}
