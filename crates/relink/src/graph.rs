//! Per-run dependency graph and cycle detection.
//!
//! The graph maps each processed module to its locally-resolved
//! dependency modules. It is built incrementally as modules are
//! processed and discarded at run end; nothing persists across runs.

use rustc_hash::FxHashMap;

/// Mapping from module identifier to its ordered local dependencies.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    edges: FxHashMap<String, Vec<String>>,
    /// Recording order, kept so traversal roots are deterministic.
    order: Vec<String>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one module's resolved local dependency list.
    pub fn record(&mut self, module_id: String, dependency_ids: Vec<String>) {
        if !self.edges.contains_key(&module_id) {
            self.order.push(module_id.clone());
        }
        self.edges.insert(module_id, dependency_ids);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Depth-first search for a circular dependency chain.
    ///
    /// Walks outgoing edges from every recorded module, carrying the
    /// current path; a dependency already on the path closes a cycle.
    /// The traversal keeps its own frame stack of (node, next-edge
    /// index) instead of recursing, so arbitrarily deep graphs cannot
    /// overflow the call stack.
    ///
    /// Returns the full chain from the cycle's first node back to the
    /// repeated node (`A -> B -> C -> A` reports `[A, B, C, A]`), or
    /// `None` when the graph is acyclic.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        const NO_DEPS: &[String] = &[];
        for root in &self.order {
            let mut path: Vec<&str> = vec![root.as_str()];
            let mut frames: Vec<(&str, usize)> = vec![(root.as_str(), 0)];
            while let Some((node, next)) = frames.last_mut() {
                let deps = self
                    .edges
                    .get(*node)
                    .map(Vec::as_slice)
                    .unwrap_or(NO_DEPS);
                let Some(dep) = deps.get(*next) else {
                    frames.pop();
                    path.pop();
                    continue;
                };
                *next += 1;
                if let Some(pos) = path.iter().position(|on_path| *on_path == dep.as_str()) {
                    let mut chain: Vec<String> =
                        path[pos..].iter().map(|id| (*id).to_string()).collect();
                    chain.push(dep.clone());
                    return Some(chain);
                }
                // Leaves with no recorded edges cannot extend a cycle.
                if self.edges.get(dep.as_str()).is_some_and(|out| !out.is_empty()) {
                    path.push(dep.as_str());
                    frames.push((dep.as_str(), 0));
                }
            }
        }
        None
    }
}
