//! Snapshot tests for the AST debug tree (`fidlgen --debug`).
//!
//! The fixtures cover every declaration kind, imports, descriptions and the flag markers, so a
//! parser change that alters the AST shows up as a snapshot diff.

use std::fs;
use std::path::Path;

use fidlgen::{debug, parser};

fn tree_for(fixture: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(fixture);
    let source = fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()));
    let file = parser::parse(&source).unwrap_or_else(|e| panic!("parsing {fixture}: {e}"));
    debug::render_tree(&file)
}

#[test]
fn notifications_tree() {
    let tree = tree_for("Notifications.fidl");
    insta::assert_snapshot!("notifications_tree", tree);
}

#[test]
fn player_tree() {
    let tree = tree_for("Player.fidl");
    insta::assert_snapshot!("player_tree", tree);
}
