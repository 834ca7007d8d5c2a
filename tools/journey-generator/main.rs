use clap::Parser;
use rand::rngs::ThreadRng;
use rand::{Rng, rng};
use serde_json::{Map, Value, json};
use std::fs;

/// A CLI tool to generate sample journey graph data for the Keiro editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// The number of form-backed nodes to generate
    #[arg(long, default_value_t = 6)]
    nodes: usize,

    /// The number of reusable forms the nodes draw from
    #[arg(long, default_value_t = 4)]
    forms: usize,

    /// The maximum number of incoming edges per node
    #[arg(long, default_value_t = 2)]
    fan_in: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    if cli.forms == 0 || cli.nodes == 0 {
        eprintln!("Error: --nodes and --forms must both be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating journey graph ({} node(s), {} form(s), fan-in <= {})...",
        cli.nodes, cli.forms, cli.fan_in
    );

    let forms = generate_forms(&mut rng, cli.forms);
    let nodes = generate_nodes(&mut rng, cli.nodes, cli.forms);
    let edges = generate_edges(&mut rng, cli.nodes, cli.fan_in);

    let graph = json!({
        "$schema": "https://example.com/schemas/action-blueprint-graph.json",
        "id": "bp_generated",
        "blueprint_name": "Generated Journey",
        "nodes": nodes,
        "edges": edges,
        "forms": forms,
        "branches": [],
        "triggers": [],
    });

    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved journey graph to '{}'",
        cli.output
    );

    Ok(())
}

const FIELD_POOL: &[(&str, &str, &str)] = &[
    ("email", "string", "Email Address"),
    ("name", "string", "Full Name"),
    ("notes", "string", "Notes"),
    ("button", "object", "Button"),
    ("multi_select", "array", "Multi Select"),
    ("dynamic_checkbox_group", "object", "Dynamic Checkbox Group"),
    ("completed_at", "string", "Completed At"),
    ("id", "string", "Record ID"),
];

/// Generates the reusable form definitions with schema-shaped fields.
fn generate_forms(rng: &mut ThreadRng, count: usize) -> Vec<Value> {
    (0..count)
        .map(|index| {
            let field_count = rng.random_range(2..=FIELD_POOL.len());
            let mut properties = Map::new();
            for (key, field_type, title) in FIELD_POOL.iter().take(field_count) {
                properties.insert(
                    key.to_string(),
                    json!({ "type": field_type, "title": title }),
                );
            }
            println!("-> Generated form 'Form {}' with {} field(s).", index, field_count);
            json!({
                "id": format!("f_{:02}", index),
                "name": format!("Form {}", index),
                "description": "generated test form",
                "is_reusable": true,
                "field_schema": { "type": "object", "properties": properties, "required": [] },
                "ui_schema": { "type": "VerticalLayout", "elements": [] },
            })
        })
        .collect()
}

/// Generates the nodes, each backed by a random form.
fn generate_nodes(rng: &mut ThreadRng, count: usize, form_count: usize) -> Vec<Value> {
    (0..count)
        .map(|index| {
            let form_index = rng.random_range(0..form_count);
            json!({
                "id": format!("n_{:02}", index),
                "type": "form",
                "position": { "x": (index as f64) * 260.0, "y": rng.random_range(0.0..400.0) },
                "data": {
                    "id": format!("n_{:02}", index),
                    "component_id": format!("f_{:02}", form_index),
                    "component_key": format!("step_{}", index),
                    "component_type": "form",
                    "name": format!("Step {}", index),
                    "approval_required": false,
                    "approval_roles": [],
                    "permitted_roles": [],
                    "prerequisites": [],
                    "input_mapping": {},
                },
            })
        })
        .collect()
}

/// Generates forward-only edges so the graph stays acyclic. Each node after
/// the first receives between one and `fan_in` incoming edges from earlier
/// nodes.
fn generate_edges(rng: &mut ThreadRng, node_count: usize, fan_in: usize) -> Vec<Value> {
    let mut edges = Vec::new();
    for target in 1..node_count {
        let incoming = rng.random_range(1..=fan_in.max(1)).min(target);
        for _ in 0..incoming {
            let source = rng.random_range(0..target);
            edges.push(json!({
                "source": format!("n_{:02}", source),
                "target": format!("n_{:02}", target),
            }));
        }
    }
    println!("-> Generated {} edge(s).", edges.len());
    edges
}
