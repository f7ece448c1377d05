#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use property_onboarding::{
    config::ConfigManager,
    fields::registry::{CHARGES, LEASING_INFO, PROPERTY_ADDRESS, RENT_REMINDER},
    flow::OnboardingFlow,
    media::Attachment,
    navigation::Route,
    screens::{CondominiumInfo, PropertyType, Role, RoleField},
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager backed by a unique directory.
pub fn setup_config_env() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

pub fn pdf(name: &str) -> Attachment {
    Attachment::new(name, "application/pdf", 2048)
}

pub fn jpeg(name: &str) -> Attachment {
    Attachment::new(name, "image/jpeg", 4096)
}

/// Fills the four required fields through their editors.
pub fn fill_required_fields(screen: &mut CondominiumInfo) {
    let editor = screen.open_editor(PROPERTY_ADDRESS).expect("address editor");
    editor.set_text("propertyName", "Maple Court");
    editor.set_text("street", "12 Elm St");
    screen.confirm_editor();

    let editor = screen.open_editor(LEASING_INFO).expect("leasing editor");
    editor.set_text("managerName", "Dana Reyes");
    editor.set_text("phone", "555-0100");
    screen.confirm_editor();

    let editor = screen.open_editor(CHARGES).expect("charges editor");
    editor.set_text("applicationFee", "25");
    editor.set_text("adminFee", "50");
    screen.confirm_editor();

    let editor = screen.open_editor(RENT_REMINDER).expect("rent editor");
    editor.set_text("dueDate", "5th");
    screen.confirm_editor();
}

/// A flow advanced past property selection as a landlord.
pub fn flow_at_condominium() -> OnboardingFlow {
    let mut flow = OnboardingFlow::default();
    let selection = flow
        .screen_mut()
        .as_selection_mut()
        .expect("selection screen");
    selection.select_property_type(PropertyType::Condominiums);
    selection.select_role(Role::Landlord);
    selection.set_terms_accepted(true);
    selection.attach(RoleField::OwnershipDocument, pdf("deed.pdf"));
    assert_eq!(flow.advance(), Some(Route::CondominiumInfo));
    flow
}
