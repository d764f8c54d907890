//! Human-readable dumps of a parsed [`InterfaceFile`].
//!
//! Used by `fidlgen --debug`. The tree form is an indented outline in source order; the JSON form
//! is the serde serialization of the AST.

use fidl_syntax::ast::{InterfaceFile, Param};

const INDENT: &str = "  ";

/// Indented outline of the file: header first, then each non-empty declaration group.
pub fn render_tree(file: &InterfaceFile) -> String {
    let mut tree = Tree::default();

    tree.line(0, format!("package {}", file.package.name));
    for import in &file.package.imports {
        tree.line(1, import.to_string());
    }

    let iface = &file.interface;
    tree.line(
        0,
        format!("interface {} v{}.{}", iface.name, iface.major_version, iface.minor_version),
    );
    if let Some(description) = &iface.description {
        tree.doc(1, description);
    }

    if !file.attributes.is_empty() {
        tree.line(0, "attributes");
        for attribute in &file.attributes {
            let array = if attribute.is_array { "[]" } else { "" };
            tree.line(1, format!("{}{array} {}", attribute.ty, attribute.name));
            tree.doc(2, &attribute.description);
        }
    }

    if !file.methods.is_empty() {
        tree.line(0, "methods");
        for method in &file.methods {
            let flag = if method.fire_and_forget { " [fireAndForget]" } else { "" };
            tree.line(1, format!("{}{flag}", method.name));
            tree.doc(2, &method.description);
            tree.params(2, "in", &method.in_params);
            tree.params(2, "out", &method.out_params);
        }
    }

    if !file.broadcasts.is_empty() {
        tree.line(0, "broadcasts");
        for broadcast in &file.broadcasts {
            let flag = if broadcast.selective { " [selective]" } else { "" };
            tree.line(1, format!("{}{flag}", broadcast.name));
            tree.doc(2, &broadcast.description);
            tree.params(2, "out", &broadcast.out_params);
        }
    }

    if !file.structs.is_empty() {
        tree.line(0, "structs");
        for decl in &file.structs {
            tree.line(1, decl.name.as_str());
            tree.doc(2, &decl.description);
            for field in &decl.fields {
                tree.param(2, field);
            }
        }
    }

    if !file.typedefs.is_empty() {
        tree.line(0, "typedefs");
        for decl in &file.typedefs {
            tree.line(1, format!("{} = {}", decl.name, decl.aliased_type));
            tree.doc(2, &decl.description);
        }
    }

    if !file.arraydefs.is_empty() {
        tree.line(0, "arrays");
        for decl in &file.arraydefs {
            tree.line(1, format!("{} = {}[]", decl.name, decl.element_type));
            tree.doc(2, &decl.description);
        }
    }

    tree.out
}

/// Pretty-printed JSON of the whole AST.
///
/// ## Errors
/// Propagates `serde_json` serialization errors.
pub fn render_json(file: &InterfaceFile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(file)
}

#[derive(Default)]
struct Tree {
    out: String,
}

impl Tree {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    /// `doc: "<trimmed description>"`, skipped when empty.
    fn doc(&mut self, depth: usize, description: &str) {
        let text = description.trim();
        if !text.is_empty() {
            self.line(depth, format!("doc: {text:?}"));
        }
    }

    fn param(&mut self, depth: usize, param: &Param) {
        self.line(depth, param.to_string());
        self.doc(depth + 1, &param.description);
    }

    /// A labelled parameter group, skipped when empty.
    fn params(&mut self, depth: usize, label: &str, params: &[Param]) {
        if params.is_empty() {
            return;
        }
        self.line(depth, label);
        for param in params {
            self.param(depth + 1, param);
        }
    }
}
