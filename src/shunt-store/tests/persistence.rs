//! The controller over the file store: changes made by one controller
//! generation are visible to the next.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use shunt_core::{DefinitionMap, DefinitionRegistry, FeedbackLog, ShuntController};
use shunt_store::{FileStore, StorePaths};

fn site_registry() -> DefinitionRegistry {
    let mut registry = DefinitionRegistry::new();
    registry.register(shunt_store::default_definitions);
    registry.register(|| {
        let mut defs = DefinitionMap::new();
        defs.insert("search".to_string(), "Full-text search".to_string());
        defs
    });
    registry
}

#[test]
fn statuses_survive_a_new_controller() {
    let tmp = TempDir::new().unwrap();
    let paths = StorePaths::from_root(tmp.path());
    paths.ensure_dirs().unwrap();

    {
        let store = FileStore::open(paths.variables_file()).unwrap();
        let mut controller = ShuntController::new(site_registry(), Box::new(store));
        let mut log = FeedbackLog::new();
        controller.set_status("search", true, &mut log).unwrap();
        assert!(!log.has_errors());
    }

    let store = FileStore::open(paths.variables_file()).unwrap();
    let controller = ShuntController::new(site_registry(), Box::new(store));
    assert!(controller.is_enabled("search").unwrap());
    assert_eq!(controller.enabled().unwrap(), vec!["search".to_string()]);
    assert!(!controller.is_enabled(shunt_store::DEFAULT_SHUNT).unwrap());
}

#[test]
fn declared_definitions_merge_over_defaults() {
    let tmp = TempDir::new().unwrap();
    let paths = StorePaths::from_root(tmp.path());
    paths.ensure_dirs().unwrap();
    std::fs::write(
        paths.definitions_file(),
        "shunt = \"Site-wide kill switch for this deployment\"\nsearch = \"Full-text search\"\n",
    )
    .unwrap();

    let mut registry = DefinitionRegistry::new();
    registry.register(shunt_store::default_definitions);
    let declared = shunt_store::load_definitions(&paths.definitions_file()).unwrap();
    registry.register(move || declared.clone());

    assert_eq!(registry.names(), vec!["search", "shunt"]);
    assert_eq!(
        registry.description("shunt"),
        Some("Site-wide kill switch for this deployment")
    );
}
