use bcp_core::{Database, Wizard, WizardBuilder};
use tempfile::TempDir;

/// Helper function to create a wizard over a fresh database file
pub fn create_test_wizard() -> (TempDir, Wizard<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let wizard = reopen_wizard(&temp_dir);
    (temp_dir, wizard)
}

/// Open a new wizard session on the database inside `temp_dir`
pub fn reopen_wizard(temp_dir: &TempDir) -> Wizard<Database> {
    WizardBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to create wizard")
}
