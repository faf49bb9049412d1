//! Hoisted definitions: the variable declaration, synthesized helpers and
//! user procedures.

use indexmap::IndexMap;

use crate::names::{NameTable, ScopeId};

/// Placeholder replaced by a helper's allocated name.
pub const FUNCTION_NAME_PLACEHOLDER: &str = "%FN%";

/// Identity of a hoisted definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefinitionKey {
    /// The `var a, b;` line declaring every used variable.
    Variables,
    /// A helper routine, keyed by its desired (canonical) name.
    Helper(String),
    /// A user procedure, keyed by its allocated name.
    Procedure(String),
}

#[derive(Debug)]
struct Definition {
    /// Name call sites use. Empty for the variable declaration.
    name: String,
    code: String,
}

/// Insertion-ordered registry of everything emitted ahead of the body.
#[derive(Debug, Default)]
pub struct Definitions {
    entries: IndexMap<DefinitionKey, Definition>,
}

impl Definitions {
    /// Return the callable name of helper `desired`, registering it first if
    /// this is the first request.
    ///
    /// `lines` use two spaces per indentation level and
    /// [`FUNCTION_NAME_PLACEHOLDER`] where the name goes.
    pub fn provide(
        &mut self,
        names: &mut NameTable,
        indent: &str,
        desired: &str,
        lines: &[&str],
    ) -> String {
        let key = DefinitionKey::Helper(desired.to_string());
        if let Some(existing) = self.entries.get(&key) {
            return existing.name.clone();
        }

        let name = names.get_distinct(desired, ScopeId::GLOBAL);
        let code = reindent(
            &lines.join("\n").replace(FUNCTION_NAME_PLACEHOLDER, &name),
            indent,
        );
        tracing::debug!(helper = desired, name = %name, "registered helper");
        self.entries.insert(
            key,
            Definition {
                name: name.clone(),
                code,
            },
        );
        name
    }

    /// Store a user procedure. A second definition under the same name
    /// replaces the first without moving it.
    pub fn define_procedure(&mut self, name: &str, code: String) {
        let key = DefinitionKey::Procedure(name.to_string());
        let replaced = self
            .entries
            .insert(
                key,
                Definition {
                    name: name.to_string(),
                    code,
                },
            )
            .is_some();
        tracing::debug!(procedure = name, replaced, "defined procedure");
    }

    /// Record the variable declaration line.
    pub fn declare_variables(&mut self, names: &[String]) {
        if names.is_empty() {
            return;
        }
        let code = format!("var {};", names.join(", "));
        self.entries.insert(
            DefinitionKey::Variables,
            Definition {
                name: String::new(),
                code,
            },
        );
    }

    pub fn contains(&self, key: &DefinitionKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &DefinitionKey) -> Option<&str> {
        self.entries.get(key).map(|d| d.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definition source texts in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|d| d.code.as_str())
    }
}

/// Replace every leading two-space unit of each line with `indent`.
/// A leftover odd space stays as is.
fn reindent(text: &str, indent: &str) -> String {
    if indent == "  " {
        return text.to_string();
    }
    text.split('\n')
        .map(|line| {
            let mut rest = line;
            let mut out = String::with_capacity(line.len());
            while let Some(stripped) = rest.strip_prefix("  ") {
                out.push_str(indent);
                rest = stripped;
            }
            out.push_str(rest);
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}
