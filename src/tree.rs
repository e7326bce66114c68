//! Module/leaf tree: modules sorted by name, each listing its member entities.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::BTreeMap;

use canvas::doc::{EntityId, WorldModel};

/// Heading for entities that belong to no module.
pub const NO_MODULE: &str = "(no module)";

/// A tree leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub id: EntityId,
    pub attached: bool,
}

/// Group entities under every module they belong to. Modules and leaves are
/// sorted; entities without modules are grouped under [`NO_MODULE`].
#[must_use]
pub fn build(world: &WorldModel) -> BTreeMap<String, Vec<Leaf>> {
    let mut tree: BTreeMap<String, Vec<Leaf>> = BTreeMap::new();
    for item in world.items() {
        let leaf = Leaf { id: item.id.clone(), attached: world.attachment(&item.id).is_some() };
        if item.modules.is_empty() {
            tree.entry(NO_MODULE.to_owned()).or_default().push(leaf);
            continue;
        }
        for module in &item.modules {
            let leaves = tree.entry(module.clone()).or_default();
            if !leaves.iter().any(|l| l.id == leaf.id) {
                leaves.push(leaf.clone());
            }
        }
    }
    tree
}

#[must_use]
pub fn render(tree: &BTreeMap<String, Vec<Leaf>>) -> String {
    let mut out = String::new();
    for (module, leaves) in tree {
        out.push_str(module);
        out.push('\n');
        for leaf in leaves {
            out.push_str(if leaf.attached { "  * " } else { "    " });
            out.push_str(&leaf.id);
            out.push('\n');
        }
    }
    out
}
