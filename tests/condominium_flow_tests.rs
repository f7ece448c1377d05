mod common;

use common::{fill_required_fields, flow_at_condominium, jpeg};
use property_onboarding::{
    fields::registry::{
        ABOUT_PROPERTY, CHARGES, COMMUNITY_AMENITY, LEASING_INFO, NEAREST_STATIONS, PET_FEES,
        PROPERTY_ADDRESS, RENT_REMINDER,
    },
    navigation::{HandoffPayload, Route},
    screens::{CondominiumInfo, Role, Screen},
};

#[test]
fn required_fields_and_cover_open_the_gate() {
    let mut screen = CondominiumInfo::new();
    assert_eq!(
        screen.missing(),
        vec![
            "Property address",
            "Leasing info",
            "Charges",
            "Rent frequency & payment reminder",
            "Cover photo"
        ]
    );

    fill_required_fields(&mut screen);
    assert_eq!(screen.missing(), vec!["Cover photo"]);
    assert!(screen.next().is_none());

    screen.gallery_mut().set_cover(jpeg("front.jpg"));
    assert!(screen.is_valid());
    assert_eq!(
        screen.next().map(|handoff| handoff.target()),
        Some(Route::CondominiumSummary)
    );
}

#[test]
fn confirmed_editors_write_reduced_display_strings() {
    let mut screen = CondominiumInfo::new();
    fill_required_fields(&mut screen);

    let store = screen.store();
    assert_eq!(store.get(PROPERTY_ADDRESS), Some("Maple Court, 12 Elm St"));
    assert_eq!(store.get(LEASING_INFO), Some("Dana Reyes (555-0100)"));
    assert_eq!(store.get(CHARGES), Some("App: $25, Admin: $50"));
    assert_eq!(store.get(RENT_REMINDER), Some("Monthly, Due: 5th"));
    assert_eq!(store.get(PET_FEES), Some(""));
}

#[test]
fn optional_editors_reduce_their_values() {
    let mut screen = CondominiumInfo::new();

    let editor = screen.open_editor(NEAREST_STATIONS).expect("open");
    editor.set_text("type", "Train");
    editor.set_text("name", "Union Station");
    editor.set_text("distance", "2");
    editor.set_text("unit", "Km");
    assert_eq!(
        screen.confirm_editor().as_deref(),
        Some("Train: Union Station (2 Km)")
    );

    let editor = screen.open_editor(COMMUNITY_AMENITY).expect("open");
    editor.toggle_amenity("Refrigerator");
    editor.toggle_amenity("Ceiling fan");
    editor.toggle_amenity("Refrigerator");
    assert_eq!(screen.confirm_editor().as_deref(), Some("Ceiling fan"));

    let editor = screen.open_editor(ABOUT_PROPERTY).expect("open");
    editor.set_text("message", "Quiet street near the park");
    screen.confirm_editor();
    assert_eq!(
        screen.store().get(ABOUT_PROPERTY),
        Some("Quiet street near the park")
    );
}

#[test]
fn snapshot_reaches_summary_and_plan_screen() {
    let mut flow = flow_at_condominium();
    let condominium = flow
        .screen_mut()
        .as_condominium_mut()
        .expect("condominium screen");
    fill_required_fields(condominium);
    condominium.gallery_mut().set_cover(jpeg("front.jpg"));

    assert_eq!(flow.advance(), Some(Route::CondominiumSummary));
    let summary = flow.screen().as_summary().expect("summary screen");
    assert_eq!(summary.store().get(CHARGES), Some("App: $25, Admin: $50"));
    assert_eq!(summary.selection().map(|context| context.role), Some(Role::Landlord));

    let summary = flow.screen_mut().as_summary_mut().expect("summary screen");
    assert!(summary.delete(CHARGES));
    assert!(!summary.is_visible(CHARGES));

    assert_eq!(flow.advance(), Some(Route::PlanSelection));
    assert!(flow.quote().is_some());
}

#[test]
fn summary_snapshot_restores_editable_values() {
    let mut flow = flow_at_condominium();
    let condominium = flow
        .screen_mut()
        .as_condominium_mut()
        .expect("condominium screen");
    fill_required_fields(condominium);
    condominium.gallery_mut().set_cover(jpeg("front.jpg"));
    let committed = condominium.value(CHARGES).cloned().expect("charges value");

    assert_eq!(flow.advance(), Some(Route::CondominiumSummary));
    let snapshot = flow.screen().as_summary().expect("summary screen").snapshot();

    let mut condominium =
        CondominiumInfo::from_handoff(Some(HandoffPayload::Condominium(snapshot)));
    assert_eq!(condominium.selection().map(|context| context.role), Some(Role::Landlord));
    assert_eq!(condominium.store().get(CHARGES), Some("App: $25, Admin: $50"));
    let editor = condominium.open_editor(CHARGES).expect("open");
    assert_eq!(editor.draft(), &committed);
    editor.set_text("adminFee", "75");
    assert_eq!(
        condominium.confirm_editor().as_deref(),
        Some("App: $25, Admin: $75")
    );
}

#[test]
fn editor_mutual_exclusion_survives_flow() {
    let mut flow = flow_at_condominium();
    let condominium = flow
        .screen_mut()
        .as_condominium_mut()
        .expect("condominium screen");
    condominium.open_editor(CHARGES).expect("open");
    assert!(condominium.open_editor(PET_FEES).is_err());
    assert!(condominium.cancel_editor());
    assert!(!condominium.cancel_editor());
    assert_eq!(condominium.store().get(CHARGES), Some(""));
}
