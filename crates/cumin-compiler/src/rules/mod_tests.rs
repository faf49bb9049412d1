use cumin_core::Node;

use super::{BlockKind, FieldChoice, choice, text_field};
use crate::Error;

field_choice! {
    Weather {
        Sunny => "SUNNY",
        Rainy => "RAINY",
    }
}

#[test]
fn every_kind_round_trips_through_its_tag() {
    assert_eq!(BlockKind::ALL.len(), 44);
    for &kind in BlockKind::ALL {
        assert_eq!(BlockKind::from_name(kind.as_str()), Some(kind));
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn unregistered_tag_is_unknown() {
    assert_eq!(BlockKind::from_name("math_number"), None);

    let node = Node::new("n1", "math_number");
    assert_eq!(
        BlockKind::of(&node),
        Err(Error::UnknownKind {
            node: "n1".into(),
            kind: "math_number".into(),
        })
    );
}

#[test]
fn kind_categories() {
    assert!(BlockKind::Text.is_value());
    assert!(BlockKind::ProceduresCallReturn.is_value());
    assert!(!BlockKind::ProceduresCallNoReturn.is_value());
    assert!(!BlockKind::TextPrint.is_value());

    assert!(BlockKind::ControlsForEach.is_loop());
    assert!(!BlockKind::ControlsIf.is_loop());

    assert!(BlockKind::ControlsFlowStatements.suppresses_prefix_suffix());
    assert!(!BlockKind::ControlsRepeat.suppresses_prefix_suffix());
}

#[test]
fn absent_choice_is_first_option() {
    let node = Node::new("w", "weather");
    assert_eq!(choice::<Weather>(&node, "SKY"), Ok(Weather::Sunny));
    assert_eq!(Weather::OPTIONS.len(), 2);
}

#[test]
fn listed_choice_is_parsed() {
    let mut node = Node::new("w", "weather");
    node.fields.insert("SKY".into(), "RAINY".into());
    assert_eq!(choice::<Weather>(&node, "SKY"), Ok(Weather::Rainy));
}

#[test]
fn unlisted_choice_is_invalid() {
    let mut node = Node::new("w", "weather");
    node.fields.insert("SKY".into(), "rainy".into());
    let err = choice::<Weather>(&node, "SKY").unwrap_err();
    assert_eq!(
        err.to_string(),
        "block `w` (weather): invalid value `rainy` for field `SKY`"
    );
}

#[test]
fn absent_text_field_is_empty() {
    let mut node = Node::new("t", "text");
    assert_eq!(text_field(&node, "TEXT"), "");
    node.fields.insert("TEXT".into(), "hi".into());
    assert_eq!(text_field(&node, "TEXT"), "hi");
}
