use cumin_compiler::BlockKind;

pub fn run() {
    print!("{}", render());
}

/// One line per block kind: its tag and whether it plugs into value slots
/// or statement chains.
pub fn render() -> String {
    let width = BlockKind::ALL
        .iter()
        .map(|kind| kind.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for kind in BlockKind::ALL {
        let shape = if kind.is_value() { "value" } else { "statement" };
        out.push_str(&format!("{:<width$}  {}\n", kind.as_str(), shape));
    }
    out
}
