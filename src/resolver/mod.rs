//! Upstream form-dependency resolution.
//!
//! Given a selected node, the resolver walks incoming edges backward and
//! reports which forms sit upstream: `direct` (one hop) and `transitive`
//! (two or more hops). The walk uses an explicit worklist with a shared
//! visited-set, so it terminates on arbitrarily cyclic graphs and visits
//! each node at most once, O(V + E) per resolution.

use crate::journey::{FormDefinition, JourneyDefinition, NodeDefinition};
use ahash::{AHashMap, AHashSet};

/// The forms reachable upstream of a node.
///
/// `direct` keeps one entry per incoming edge, so a form repeats when the
/// same form is reachable via multiple direct edges. `transitive` is
/// deduplicated by form id. The asymmetry mirrors the behavior the external
/// runtime already depends on. A form in `direct` may also appear in
/// `transitive` when it is additionally reachable by a longer path; the two
/// sequences are never deduplicated against each other.
#[derive(Debug, Default)]
pub struct FormDependencies<'a> {
    pub direct: Vec<&'a FormDefinition>,
    pub transitive: Vec<&'a FormDefinition>,
}

impl FormDependencies<'_> {
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.transitive.is_empty()
    }
}

/// Resolves upstream form dependencies over a journey graph.
///
/// Construction indexes nodes, forms and incoming edges once; `resolve` can
/// then be called for any number of node selections against the same graph.
pub struct DependencyResolver<'a> {
    nodes: AHashMap<&'a str, &'a NodeDefinition>,
    forms: AHashMap<&'a str, &'a FormDefinition>,
    /// target node id -> source node ids, in edge order.
    incoming: AHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(journey: &'a JourneyDefinition) -> Self {
        let nodes = journey
            .nodes
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect();
        let forms = journey
            .forms
            .iter()
            .map(|form| (form.id.as_str(), form))
            .collect();

        let mut incoming: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in &journey.edges {
            incoming
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }

        Self {
            nodes,
            forms,
            incoming,
        }
    }

    /// Computes direct and transitive upstream forms for a node.
    ///
    /// An edge whose source node does not exist, or a node whose
    /// `component_id` resolves to no form, contributes nothing but never
    /// aborts the traversal of its own predecessors.
    pub fn resolve(&self, node_id: &str) -> FormDependencies<'a> {
        let mut direct = Vec::new();
        let mut seeds = Vec::new();

        for &source in self.sources_of(node_id) {
            let Some(node) = self.nodes.get(source) else {
                continue;
            };
            if let Some(form) = self.form_of(node) {
                direct.push(form);
            }
            seeds.push(source);
        }

        let mut transitive: Vec<&'a FormDefinition> = Vec::new();
        let mut visited: AHashSet<&str> = AHashSet::new();

        for seed in seeds {
            let mut stack = vec![seed];
            while let Some(current) = stack.pop() {
                if !visited.insert(current) {
                    continue;
                }

                let mut discovered = Vec::new();
                for &source in self.sources_of(current) {
                    let Some(node) = self.nodes.get(source) else {
                        continue;
                    };
                    // The selected node's own form is never a transitive
                    // dependency of itself, even on a cycle.
                    if source != node_id
                        && let Some(form) = self.form_of(node)
                        && !transitive.iter().any(|f| f.id == form.id)
                    {
                        transitive.push(form);
                    }
                    discovered.push(source);
                }
                // Reverse so the first incoming edge is explored first.
                stack.extend(discovered.into_iter().rev());
            }
        }

        FormDependencies { direct, transitive }
    }

    fn sources_of(&self, node_id: &str) -> std::slice::Iter<'_, &'a str> {
        self.incoming
            .get(node_id)
            .map(|sources| sources.iter())
            .unwrap_or_default()
    }

    fn form_of(&self, node: &NodeDefinition) -> Option<&'a FormDefinition> {
        self.forms.get(node.component_id.as_str()).copied()
    }
}
