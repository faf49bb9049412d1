use crate::{ExtraState, NodeId, WorkspaceBuilder, WorkspaceError};

#[test]
fn builder_wires_slots() {
    let mut b = WorkspaceBuilder::new();
    let set = b.node("variables_set");
    let value = b.node("logic_null");
    b.field(set, "VAR", "x").value(set, "VALUE", value).top(set);

    let ws = b.build().unwrap();
    let node = ws.get(set).unwrap();
    assert_eq!(node.value("VALUE"), Some(value));
    assert_eq!(ws.top_nodes(), [set]);
}

#[test]
fn builder_allows_cycles() {
    let mut b = WorkspaceBuilder::new();
    let a = b.node("text_print");
    let c = b.node("text_print");
    b.next(a, c).next(c, a).top(a);

    assert!(b.build().is_ok());
}

#[test]
fn builder_rejects_dangling_links() {
    let mut b = WorkspaceBuilder::new();
    let a = b.node("text_print");
    b.next(a, NodeId(7));

    let err = b.build().unwrap_err();
    assert!(matches!(err, WorkspaceError::DanglingReference { target: 7, .. }));
}

#[test]
fn used_variables_in_order() {
    let mut b = WorkspaceBuilder::new();
    b.variable("Total");
    let def = b.node("procedures_defnoreturn");
    b.extra(
        def,
        ExtraState {
            params: vec!["item".to_string()],
            ..ExtraState::default()
        },
    );
    let set = b.node("variables_set");
    b.field(set, "VAR", "total");
    let get = b.node("variables_get");
    b.field(get, "VAR", "count");
    b.value(set, "VALUE", get);
    b.statement(def, "STACK", set).top(def);

    let ws = b.build().unwrap();
    assert_eq!(ws.used_variables(), ["Total", "item", "count"]);
}

#[test]
fn used_variables_survive_cycles() {
    let mut b = WorkspaceBuilder::new();
    let a = b.node("variables_set");
    b.field(a, "VAR", "x");
    let c = b.node("variables_set");
    b.field(c, "VAR", "y");
    b.next(a, c).next(c, a).top(a);

    let ws = b.build().unwrap();
    assert_eq!(ws.used_variables(), ["x", "y"]);
}

#[test]
fn synthesized_ids_yield_to_later_explicit_ids() {
    let mut b = WorkspaceBuilder::new();
    let unnamed = b.node("text_print");
    let named = b.node_with_id("b0", "text_print");
    b.next(unnamed, named).top(unnamed);

    let ws = b.build().unwrap();
    assert_eq!(ws.get(unnamed).unwrap().id, "b0_1");
    assert_eq!(ws.get(named).unwrap().id, "b0");
}

#[test]
fn builder_rejects_duplicate_explicit_ids() {
    let mut b = WorkspaceBuilder::new();
    b.node_with_id("a", "text_print");
    b.node_with_id("a", "text_print");

    let err = b.build().unwrap_err();
    assert!(matches!(err, WorkspaceError::DuplicateId(id) if id == "a"));
}
