use indoc::indoc;

use crate::{Workspace, WorkspaceError};

#[test]
fn flattens_nested_blocks() {
    let json = indoc! {r#"
        {
          "variables": ["total"],
          "blocks": [
            {
              "type": "variables_set",
              "id": "set",
              "fields": { "VAR": "total" },
              "inputs": {
                "VALUE": { "type": "logic_boolean", "id": "flag", "fields": { "BOOL": "TRUE" } }
              },
              "next": { "type": "text_print", "id": "print" }
            }
          ]
        }
    "#};

    let ws = Workspace::from_json(json).unwrap();
    assert_eq!(ws.len(), 3);
    assert_eq!(ws.variables(), ["total"]);

    let root = ws.get(ws.top_nodes()[0]).unwrap();
    assert_eq!(root.id, "set");
    assert_eq!(root.kind, "variables_set");
    assert_eq!(root.field("VAR"), Some("total"));

    let value = ws.get(root.value("VALUE").unwrap()).unwrap();
    assert_eq!(value.id, "flag");

    let next = ws.get(root.next.unwrap()).unwrap();
    assert_eq!(next.kind, "text_print");
}

#[test]
fn synthesizes_missing_ids() {
    let json = r#"{ "blocks": [ { "type": "logic_null" }, { "type": "logic_null" } ] }"#;

    let ws = Workspace::from_json(json).unwrap();
    let ids: Vec<&str> = ws.iter().map(|(_, node)| node.id.as_str()).collect();
    assert_eq!(ids, ["b0", "b1"]);
}

#[test]
fn stringifies_scalar_fields() {
    let json = r#"{ "blocks": [ { "type": "controls_repeat", "fields": { "TIMES": 10, "FLAG": true } } ] }"#;

    let ws = Workspace::from_json(json).unwrap();
    let node = ws.get(ws.top_nodes()[0]).unwrap();
    assert_eq!(node.field("TIMES"), Some("10"));
    assert_eq!(node.field("FLAG"), Some("TRUE"));
}

#[test]
fn reads_extra_state() {
    let json = indoc! {r#"
        {
          "blocks": [
            {
              "type": "procedures_defreturn",
              "extraState": { "params": ["x", { "name": "y", "id": "v2" }] }
            },
            {
              "type": "controls_if",
              "extraState": { "elseIfCount": 2, "hasElse": true }
            }
          ]
        }
    "#};

    let ws = Workspace::from_json(json).unwrap();
    let def = ws.get(ws.top_nodes()[0]).unwrap();
    assert_eq!(def.extra.params, ["x", "y"]);

    let branch = ws.get(ws.top_nodes()[1]).unwrap();
    assert_eq!(branch.extra.else_if_count, 2);
    assert!(branch.extra.has_else);
}

#[test]
fn reads_options() {
    let json = r#"{ "options": { "oneBasedIndex": true } }"#;

    let ws = Workspace::from_json(json).unwrap();
    assert!(ws.options().one_based_index);
    assert!(ws.is_empty());
}

#[test]
fn rejects_duplicate_ids() {
    let json = r#"{ "blocks": [ { "type": "logic_null", "id": "a" }, { "type": "logic_null", "id": "a" } ] }"#;

    let err = Workspace::from_json(json).unwrap_err();
    assert!(matches!(err, WorkspaceError::DuplicateId(id) if id == "a"));
}

#[test]
fn rejects_malformed_json() {
    let err = Workspace::from_json(r#"{ "blocks": [ { "id": "no-type" } ] }"#).unwrap_err();
    assert!(matches!(err, WorkspaceError::Json(_)));
}

#[test]
fn loads_long_statement_chains() {
    let len = 600;
    let mut chain = String::new();
    for i in 0..len {
        chain.push_str(&format!(r#"{{ "type": "text_print", "id": "p{i}", "next": "#));
    }
    chain.push_str("null");
    chain.push_str(&" }".repeat(len));
    let json = format!(r#"{{ "blocks": [ {chain} ] }}"#);

    let ws = Workspace::from_json(&json).unwrap();
    assert_eq!(ws.len(), len);
    assert_eq!(ws.top_nodes().len(), 1);

    let mut cursor = Some(ws.top_nodes()[0]);
    let mut ids = Vec::new();
    while let Some(id) = cursor {
        let node = ws.get(id).unwrap();
        ids.push(node.id.clone());
        cursor = node.next;
    }
    assert_eq!(ids.len(), len);
    assert_eq!(ids[0], "p0");
    assert_eq!(ids[len - 1], "p599");
}

#[test]
fn rejects_trailing_input() {
    let err = Workspace::from_json(r#"{ "blocks": [] } []"#).unwrap_err();
    assert!(matches!(err, WorkspaceError::Json(_)));
}

#[test]
fn synthesized_ids_avoid_explicit_ones() {
    let json = r#"{ "blocks": [ { "type": "text_print", "id": "b1" }, { "type": "text_print" } ] }"#;

    let ws = Workspace::from_json(json).unwrap();
    let ids: Vec<&str> = ws.iter().map(|(_, node)| node.id.as_str()).collect();
    assert_eq!(ids, ["b1", "b1_1"]);
}
