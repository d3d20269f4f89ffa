use crate::assessment::catalog::{Catalog, ANGER_SELF_REPORT, BUSS_DURKEE, BUSS_PERRY};
use crate::assessment::domain::{AssessmentError, Scale};

#[test]
fn bundled_catalog_lists_three_questionnaires() {
    let catalog = Catalog::bundled();
    let ids: Vec<_> = catalog
        .definitions()
        .iter()
        .map(|definition| definition.id())
        .collect();

    assert_eq!(ids, [BUSS_PERRY, BUSS_DURKEE, ANGER_SELF_REPORT]);
    assert!(catalog
        .definitions()
        .iter()
        .all(|definition| definition.scale() == Scale::LIKERT_FIVE));
}

#[test]
fn bundled_questionnaires_flag_expected_reversed_items() {
    let catalog = Catalog::bundled();
    let reversed = |id: &str| -> (usize, Vec<String>) {
        let definition = catalog.get(id).expect("bundled questionnaire");
        (
            definition.len(),
            definition
                .reversed_items()
                .map(|item| item.id.clone())
                .collect(),
        )
    };

    assert_eq!(reversed(BUSS_PERRY), (29, vec!["bp15".into(), "bp24".into()]));
    assert_eq!(
        reversed(BUSS_DURKEE),
        (20, vec!["bd1".into(), "bd10".into(), "bd17".into()])
    );
    assert_eq!(reversed(ANGER_SELF_REPORT), (15, vec!["asr14".into()]));
}

#[test]
fn catalog_is_initialized_once() {
    assert!(std::ptr::eq(Catalog::bundled(), Catalog::bundled()));
}

#[test]
fn require_reports_unknown_definitions() {
    let error = Catalog::bundled()
        .require("beck-depression")
        .expect_err("not bundled");

    assert_eq!(
        error,
        AssessmentError::UnknownDefinition("beck-depression".to_string())
    );
}

#[test]
fn bundled_item_text_reads_as_complete_sentences() {
    let catalog = Catalog::bundled();
    let text = |definition_id: &str, item_id: &str| -> String {
        catalog
            .get(definition_id)
            .and_then(|definition| definition.item(item_id))
            .map(|item| item.text.clone())
            .expect("bundled item")
    };

    assert_eq!(
        text(BUSS_PERRY, "bp17"),
        "If I have to resort to violence to protect my rights, I will."
    );
    assert_eq!(
        text(BUSS_PERRY, "bp13"),
        "I get into fights a little more than the average person."
    );
    assert_eq!(text(BUSS_DURKEE, "bd18"), "When I am angry, I sometimes sulk.");
    assert_eq!(
        text(ANGER_SELF_REPORT, "asr11"),
        "I get angry quickly but get over it quickly."
    );
    assert!(catalog
        .definitions()
        .iter()
        .flat_map(|definition| definition.items())
        .all(|item| !item.text.ends_with('\'')));
}
