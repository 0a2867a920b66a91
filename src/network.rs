// src/network.rs
// Network Topology Generator
// Derives the three display topologies (full / small_world / sparse) from the
// agent list. Attitude scores never feed in; this is pure graph shape for the
// force-directed view.

use crate::models::AgentRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkNode {
    pub id: usize,
    pub name: String,
    pub group: usize, // floor(index / 5), cosmetic clustering only
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkLink {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkBundle {
    pub full: NetworkGraph,
    pub small_world: NetworkGraph,
    pub sparse: NetworkGraph,
}

// Pure and total: an empty agent list yields empty graphs, never an error.
// The config block is echoed through unused today; the frontend picks the
// preselected variant from metadata, not from here.
pub fn generate_network_data(agents: &[AgentRecord], _network_config: &Value) -> NetworkBundle {
    let nodes: Vec<NetworkNode> = agents
        .iter()
        .enumerate()
        .map(|(i, a)| NetworkNode {
            id: a.id,
            name: a.name.clone(),
            group: i / 5,
        })
        .collect();

    let n = agents.len();

    // Fully connected: every unordered pair once, n(n-1)/2 links
    let mut full_links = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            full_links.push(NetworkLink { source: i, target: j });
        }
    }

    // Small world: k=4 ring lattice plus floor(n/3) long-range shortcuts.
    // Overlapping ring/shortcut edges (and the n=1 self-loops) are NOT
    // deduplicated - the original emitter produced them and the force layout
    // tolerates them, so link counts stay comparable.
    let mut sw_links = Vec::new();
    for i in 0..n {
        for k in 1..=2 {
            sw_links.push(NetworkLink {
                source: i,
                target: (i + k) % n,
            });
        }
    }
    for i in 0..n / 3 {
        sw_links.push(NetworkLink {
            source: i,
            target: (i + n / 2) % n,
        });
    }

    // Sparse: a single ring - chain edges plus one closing edge when n > 1
    let mut sparse_links = Vec::new();
    for i in 0..n.saturating_sub(1) {
        sparse_links.push(NetworkLink {
            source: i,
            target: i + 1,
        });
    }
    if n > 1 {
        sparse_links.push(NetworkLink {
            source: n - 1,
            target: 0,
        });
    }

    // Each variant owns an independent node list: the frontend mutates node
    // positions in place during layout, so sharing would corrupt the others.
    NetworkBundle {
        full: NetworkGraph {
            nodes: nodes.clone(),
            links: full_links,
        },
        small_world: NetworkGraph {
            nodes: nodes.clone(),
            links: sw_links,
        },
        sparse: NetworkGraph {
            nodes,
            links: sparse_links,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agents(n: usize) -> Vec<AgentRecord> {
        (0..n)
            .map(|i| AgentRecord {
                id: i,
                name: format!("Agent {}", i),
                age: 30,
                occupation: "Tester".to_string(),
                personality: "balanced".to_string(),
                profile: None,
            })
            .collect()
    }

    fn config() -> Value {
        serde_json::json!({})
    }

    #[test]
    fn edge_counts_for_five_agents() {
        let bundle = generate_network_data(&agents(5), &config());

        assert_eq!(bundle.full.links.len(), 10); // 5 * 4 / 2
        assert_eq!(bundle.sparse.links.len(), 5); // chain of 4 + closing edge
        assert_eq!(bundle.small_world.links.len(), 11); // 2n ring + floor(n/3) shortcuts
    }

    #[test]
    fn sparse_ring_closes_only_above_one_node() {
        let one = generate_network_data(&agents(1), &config());
        assert!(one.sparse.links.is_empty());

        let two = generate_network_data(&agents(2), &config());
        assert_eq!(
            two.sparse.links,
            vec![
                NetworkLink { source: 0, target: 1 },
                NetworkLink { source: 1, target: 0 },
            ]
        );
    }

    #[test]
    fn single_agent_small_world_keeps_self_loops() {
        let bundle = generate_network_data(&agents(1), &config());
        // (0+1) % 1 and (0+2) % 1 both wrap to 0
        assert_eq!(
            bundle.small_world.links,
            vec![
                NetworkLink { source: 0, target: 0 },
                NetworkLink { source: 0, target: 0 },
            ]
        );
    }

    #[test]
    fn empty_agent_list_yields_empty_graphs() {
        let bundle = generate_network_data(&[], &config());
        for graph in [&bundle.full, &bundle.small_world, &bundle.sparse] {
            assert!(graph.nodes.is_empty());
            assert!(graph.links.is_empty());
        }
    }

    #[test]
    fn variants_do_not_share_node_storage() {
        let mut bundle = generate_network_data(&agents(3), &config());

        bundle.full.nodes[0].name = "mutated by layout".to_string();
        bundle.full.nodes[0].group = 99;

        assert_eq!(bundle.small_world.nodes[0].name, "Agent 0");
        assert_eq!(bundle.sparse.nodes[0].name, "Agent 0");
        assert_eq!(bundle.sparse.nodes[0].group, 0);
    }

    #[test]
    fn groups_cluster_in_blocks_of_five() {
        let bundle = generate_network_data(&agents(12), &config());
        assert_eq!(bundle.full.nodes[4].group, 0);
        assert_eq!(bundle.full.nodes[5].group, 1);
        assert_eq!(bundle.full.nodes[11].group, 2);
    }

    #[test]
    fn shortcut_targets_wrap_around_the_ring() {
        let bundle = generate_network_data(&agents(6), &config());
        // floor(6/3) = 2 shortcuts: 0 -> 3 and 1 -> 4
        let shortcuts = bundle.small_world.links[12..].to_vec();
        assert_eq!(
            shortcuts,
            vec![
                NetworkLink { source: 0, target: 3 },
                NetworkLink { source: 1, target: 4 },
            ]
        );
    }
}
