//! Scope-aware identifier allocation.
//!
//! User-facing names (variables, procedures) go through [`NameTable::get_or_create`]
//! so every reference agrees on one spelling. Engine temporaries (loop counters,
//! cached bounds, helper functions) go through [`NameTable::get_distinct`], which
//! always hands out a fresh name.

use std::collections::{HashMap, HashSet};

/// Keyword and host-global names a generated identifier must never take.
pub const RESERVED_WORDS: &[&str] = &[
    // Keywords
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "finally", "for", "function", "if", "implements",
    "import", "in", "instanceof", "interface", "let", "new", "package", "private", "protected",
    "public", "return", "static", "super", "switch", "this", "throw", "try", "typeof", "var",
    "void", "while", "with", "yield", "await", "null", "true", "false", "arguments",
    // Host globals
    "Array", "Boolean", "Date", "Error", "Function", "Infinity", "JSON", "Math", "NaN",
    "Number", "Object", "RegExp", "String", "undefined", "window", "document", "alert",
    "prompt", "console", "eval", "isFinite", "isNaN", "parseFloat", "parseInt",
];

/// Namespace of a user-facing key. Variables and procedures may share a
/// spelling in the editor but must map to different identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameKind {
    Variable,
    Procedure,
}

/// Handle to a naming scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default)]
struct Scope {
    parent: Option<ScopeId>,
    /// `(kind, lowercased key)` -> allocated name
    keys: HashMap<(NameKind, String), String>,
    /// Names allocated in this scope
    taken: HashSet<String>,
}

/// Per-session name registry.
///
/// A name allocated in one scope is visible to its ancestors and descendants:
/// a candidate is free only if no scope on either side of the chain holds it.
/// Sibling scopes (two procedure bodies) may reuse each other's temporaries.
#[derive(Debug)]
pub struct NameTable {
    reserved: HashSet<String>,
    scopes: Vec<Scope>,
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl NameTable {
    /// Create a table reserving the built-in words plus `extra`.
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reserved: HashSet<String> =
            RESERVED_WORDS.iter().map(|w| (*w).to_string()).collect();
        reserved.extend(extra.into_iter().map(|w| w.as_ref().to_string()));
        Self {
            reserved,
            scopes: vec![Scope::default()],
        }
    }

    /// Open a child scope (a procedure body).
    pub fn open_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            parent: Some(parent),
            ..Scope::default()
        });
        id
    }

    /// Name for a user-declared entity. Repeated calls with the same key
    /// (case-insensitive) return the first-assigned name.
    ///
    /// The key is looked up through `scope` and its ancestors; if absent it is
    /// allocated in `scope`.
    pub fn get_or_create(&mut self, key: &str, kind: NameKind, scope: ScopeId) -> String {
        let lookup = (kind, key.to_lowercase());
        for id in self.ancestors(scope) {
            if let Some(name) = self.scopes[id.index()].keys.get(&lookup) {
                return name.clone();
            }
        }

        let name = self.get_distinct(key, scope);
        self.scopes[scope.index()].keys.insert(lookup, name.clone());
        name
    }

    /// Fresh name derived from `base`, never returned before in a visible scope.
    ///
    /// Tries `base`, then `base2`, `base3`, ...
    pub fn get_distinct(&mut self, base: &str, scope: ScopeId) -> String {
        let safe = safe_name(base);
        let mut candidate = safe.clone();
        let mut counter = 1;
        while self.is_taken(&candidate, scope) {
            counter += 1;
            candidate = format!("{safe}{counter}");
        }
        self.scopes[scope.index()].taken.insert(candidate.clone());
        candidate
    }

    /// Whether `name` is reserved or held by a scope related to `scope`.
    pub fn is_taken(&self, name: &str, scope: ScopeId) -> bool {
        if self.reserved.contains(name) {
            return true;
        }
        self.ancestors(scope)
            .chain(self.descendants(scope))
            .any(|id| self.scopes[id.index()].taken.contains(name))
    }

    fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |id| self.scopes[id.index()].parent)
    }

    fn descendants(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        (0..self.scopes.len())
            .map(|i| ScopeId(i as u32))
            .filter(move |&id| id != scope && self.ancestors(id).any(|a| a == scope))
    }
}

/// Turn arbitrary editor text into a legal identifier.
///
/// Spaces become underscores; characters a URI encoder leaves untouched become
/// `_`; everything else becomes `_XX` per UTF-8 byte. A leading digit gains a
/// `my_` prefix and empty input becomes `unnamed`.
pub fn safe_name(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }

    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            ' ' => out.push('_'),
            c if c.is_ascii() && is_uri_safe(c) => out.push('_'),
            c => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("_{byte:02X}"));
                }
            }
        }
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "my_");
    }
    out
}

fn is_uri_safe(c: char) -> bool {
    matches!(
        c,
        ';' | ',' | '/' | '?' | ':' | '@' | '&' | '=' | '+' | '$' | '-' | '.' | '!' | '~' | '*'
            | '\'' | '(' | ')' | '#'
    )
}
