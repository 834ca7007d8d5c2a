use clap::Parser;
use itertools::Itertools;
use keiro::prelude::*;
use std::io::{self, Write};

/// A journey graph inspector and prefill mapping editor CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the journey graph JSON file
    graph_path: Option<String>,

    /// Print upstream dependencies and mapping targets for this node id
    #[arg(short, long)]
    node: Option<String>,

    /// Filter mapping targets by a search term
    #[arg(short, long)]
    search: Option<String>,

    /// Run in interactive mode to edit prefill values
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let graph_path = cli.graph_path.unwrap_or_else(|| {
        exit_with_error("Graph path is required in non-interactive mode.");
    });

    let session = load_session(&graph_path);
    print_summary(&session);

    if let Some(node_id) = cli.node {
        print_dependencies(&session, &node_id, cli.search.as_deref().unwrap_or(""));
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- Keiro Interactive Mode ---");

    let graph_path = prompt_for_input("Enter journey graph path", Some("data/graph.json"));
    let mut session = load_session(&graph_path);
    print_summary(&session);

    loop {
        print_nodes(&session);
        let node_id = prompt_for_input("Select a node id ('q' to quit)", None);
        if node_id.is_empty() || node_id == "q" {
            break;
        }

        let Some(draft) = session.open_prefill(&node_id) else {
            println!("No form found for node '{}'.", node_id);
            continue;
        };
        edit_prefill(&mut session, draft);
    }

    println!(
        "\nDone. {} node(s) have prefill configured.",
        session.store().len()
    );
}

/// The prefill dialog loop for a single node.
fn edit_prefill(session: &mut JourneySession, mut draft: PrefillDraft) {
    let node_id = draft.node_id().to_string();
    println!("\nPrefill fields for {}", draft.form().name);

    loop {
        print_values(session, &draft);
        println!("\nCommands: [a]dd  [e]dit  [r]emove  [s]ave  [c]ancel");
        let command = prompt_for_input("Enter command", Some("a"));

        match command.trim() {
            "a" => {
                let available = draft
                    .available_fields()
                    .iter()
                    .map(|f| format!("{} ({})", f.key, f.field_type))
                    .join(", ");
                if available.is_empty() {
                    println!("All fields already have prefill values.");
                    continue;
                }
                println!("Available fields: {}", available);
                let field = prompt_for_input("Select field", None);
                if let Err(e) = draft.select_field(&field) {
                    println!("{}", e);
                    continue;
                }
                enter_value(session, &mut draft, &node_id);
            }
            "e" => {
                let field = prompt_for_input("Field to edit", None);
                if let Err(e) = draft.begin_edit(&field) {
                    println!("{}", e);
                    continue;
                }
                enter_value(session, &mut draft, &node_id);
            }
            "r" => {
                let field = prompt_for_input("Field to remove", None);
                draft.remove_field(&field);
            }
            "s" => {
                if !draft.can_save() {
                    println!("Finish or cancel the current edit before saving.");
                    continue;
                }
                let (node_id, values) = session.save_prefill(draft);
                println!("Saved {} prefill value(s) for '{}'.", values.len(), node_id);
                return;
            }
            "c" => {
                println!("Discarded changes for '{}'.", node_id);
                return;
            }
            other => println!("Unknown command '{}'.", other),
        }
    }
}

/// Prompts for a value for the pending field; an empty value opens the
/// mapping picker.
fn enter_value(session: &JourneySession, draft: &mut PrefillDraft, node_id: &str) {
    let value = prompt_for_input("Enter value (empty to map from another form)", None);
    if let Err(e) = draft.set_value(value) {
        println!("{}", e);
        return;
    }
    match draft.submit() {
        Ok(AddOutcome::Added) => {}
        Ok(AddOutcome::MappingRequested(field)) => pick_mapping(session, draft, node_id, &field),
        Err(e) => println!("{}", e),
    }
}

/// The mapping picker: search across dependency form fields and globals.
fn pick_mapping(session: &JourneySession, draft: &mut PrefillDraft, node_id: &str, field: &str) {
    let catalog = session.mapping_catalog(node_id);
    if catalog.is_empty() {
        println!("No mapping targets available for this node.");
        draft.cancel();
        return;
    }

    println!("Select mapping for \"{}\"", field);
    let term = prompt_for_input("Search for fields (empty for all)", None);
    let options = catalog.search(&term);
    if options.is_empty() {
        println!("No mapping targets match '{}'.", term);
        draft.cancel();
        return;
    }

    for (index, option) in options.iter().enumerate() {
        println!(
            "  {}: {} ({} - {})",
            index + 1,
            option.label,
            option.data_type,
            option.description
        );
    }

    let choice = prompt_for_input("Enter choice", Some("1"));
    let selected = choice
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| options.get(i));
    match selected {
        Some(option) => {
            if let Err(e) = draft.apply_mapping(&option.id) {
                println!("{}", e);
            }
        }
        None => {
            println!("Invalid choice.");
            draft.cancel();
        }
    }
}

fn load_session(graph_path: &str) -> JourneySession {
    let mut session = JourneySession::new();
    let source = JsonFileSource::new(graph_path);
    if !session.load(&source) {
        exit_with_error(&format!("Could not load graph from '{}'", graph_path));
    }
    session
}

fn print_summary(session: &JourneySession) {
    let Some(journey) = session.journey() else {
        return;
    };
    let title = journey
        .metadata
        .get("blueprint_name")
        .and_then(|v| v.as_str())
        .unwrap_or("Journey");
    println!(
        "\n{}: {} node(s), {} edge(s), {} form(s)",
        title,
        journey.nodes.len(),
        journey.edges.len(),
        journey.forms.len()
    );
    println!(
        "Forms: {}",
        journey.forms.iter().map(|f| f.name.as_str()).join(", ")
    );
}

fn print_nodes(session: &JourneySession) {
    println!("\nNodes:");
    for sketch in session.node_sketches() {
        let marker = if session.store().has_prefill(&sketch.id) {
            " [prefill]"
        } else {
            ""
        };
        println!("  {} - {}{}", sketch.id, sketch.label, marker);
    }
}

fn print_values(session: &JourneySession, draft: &PrefillDraft) {
    if draft.values().is_empty() {
        println!("\nNo prefill values configured");
        return;
    }
    println!("\nCurrent prefill values:");
    for (field, value) in draft.values() {
        if session.is_reference(value) {
            let info = session.describe(value);
            println!(
                "  {} <- {} -> {} [mapped]",
                field, info.form_name, info.field_name
            );
        } else {
            println!("  {} = {}", field, value);
        }
    }
}

fn print_dependencies(session: &JourneySession, node_id: &str, search: &str) {
    let deps = session.dependencies(node_id);
    println!("\nDependencies of '{}':", node_id);
    println!(
        "  direct:     {}",
        deps.direct.iter().map(|f| f.name.as_str()).join(", ")
    );
    println!(
        "  transitive: {}",
        deps.transitive.iter().map(|f| f.name.as_str()).join(", ")
    );

    let catalog = session.mapping_catalog(node_id);
    println!("\nMapping targets:");
    for option in catalog.search(search) {
        println!(
            "  {} - {} ({} - {})",
            option.id, option.label, option.data_type, option.description
        );
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    let _ = io::stdout().flush();

    if io::stdin().read_line(&mut line).is_err() {
        exit_with_error("Failed to read input");
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
