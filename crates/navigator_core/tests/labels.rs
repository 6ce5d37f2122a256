use navigator_core::{action_label, section_title, ContentKind, ResultItem};

#[test]
fn every_known_tag_maps_to_its_kind() {
    assert_eq!(ContentKind::from_tag("products"), ContentKind::Products);
    assert_eq!(ContentKind::from_tag("jobs"), ContentKind::Jobs);
    assert_eq!(
        ContentKind::from_tag("repositories"),
        ContentKind::Repositories
    );
    assert_eq!(ContentKind::from_tag("videos"), ContentKind::Videos);
    assert_eq!(ContentKind::from_tag("questions"), ContentKind::Questions);
}

#[test]
fn unknown_tags_fall_back_without_failing() {
    assert_eq!(ContentKind::from_tag("general"), ContentKind::General);
    assert_eq!(ContentKind::from_tag("articles"), ContentKind::General);
    assert_eq!(ContentKind::from_tag(""), ContentKind::General);
    assert_eq!(ContentKind::General.default_action_label(), "View Details");
    assert!(!ContentKind::General.icon().is_empty());
}

#[test]
fn default_action_labels_match_their_kind() {
    assert_eq!(ContentKind::Products.default_action_label(), "View Product");
    assert_eq!(ContentKind::Jobs.default_action_label(), "View Job");
    assert_eq!(
        ContentKind::Repositories.default_action_label(),
        "View Repository"
    );
    assert_eq!(ContentKind::Videos.default_action_label(), "Watch Video");
    assert_eq!(
        ContentKind::Questions.default_action_label(),
        "View Question"
    );
}

#[test]
fn item_action_text_overrides_any_content_type() {
    let item = ResultItem {
        action_text: Some("Grab It".to_string()),
        ..ResultItem::default()
    };
    assert_eq!(action_label(&item, "products"), "Grab It");
    assert_eq!(action_label(&item, "videos"), "Grab It");
    assert_eq!(action_label(&item, "no-such-tag"), "Grab It");
}

#[test]
fn missing_or_empty_action_text_uses_the_table() {
    let bare = ResultItem::default();
    assert_eq!(action_label(&bare, "jobs"), "View Job");
    assert_eq!(action_label(&bare, "something-new"), "View Details");

    let empty = ResultItem {
        action_text: Some(String::new()),
        ..ResultItem::default()
    };
    assert_eq!(action_label(&empty, "videos"), "Watch Video");
}

#[test]
fn section_titles_capitalize_the_tag() {
    assert_eq!(section_title("products"), "Products");
    assert_eq!(section_title("questions"), "Questions");
    assert_eq!(section_title("articles"), "Articles");
    assert_eq!(section_title("general"), "General");
    assert_eq!(section_title(""), "");
}
