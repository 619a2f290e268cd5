use clap::Parser;
use keiro::graph::{Connection, Node, Project};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Map, Value, json};

/// A CLI tool to generate random project graphs for compiler stress tests
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated project JSON to
    #[arg(short, long, default_value = "generated_project.json")]
    output: String,

    /// Number of event roots to generate
    #[arg(long, default_value_t = 3)]
    roots: usize,

    /// The maximum chain length under each root
    #[arg(long, default_value_t = 4)]
    max_chain: usize,
}

const EVENT_TAGS: [&str; 3] = ["TimerEvent", "ButtonEvent", "SensorEvent"];
const ACTION_TAGS: [(&str, &str); 4] = [
    ("RelayAction", "State"),
    ("LedAction", "Color"),
    ("BuzzerAction", "Pattern"),
    ("DelayAction", "Duration"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.max_chain == 0 {
        eprintln!("Error: --max-chain must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating project graph ({} roots, chains up to {} actions)...",
        cli.roots, cli.max_chain
    );

    let mut project = Project::default();
    for root_index in 0..cli.roots {
        generate_chain(&mut rng, &mut project, root_index, cli.max_chain);
    }

    project.save(&cli.output)?;
    println!(
        "Generated {} nodes and {} connections into '{}'",
        project.nodes.len(),
        project.connections.len(),
        cli.output
    );

    Ok(())
}

/// Appends one event root and a random action chain hanging off it.
fn generate_chain(rng: &mut ThreadRng, project: &mut Project, root_index: usize, max_chain: usize) {
    let event_tag = EVENT_TAGS[rng.random_range(0..EVENT_TAGS.len())];
    let root_uuid = format!("event-{root_index}");
    let mut metadata = Map::new();
    metadata.insert("index".to_string(), json!(root_index));
    project.nodes.push(node(event_tag, &root_uuid, metadata));

    let event_out = event_data_pin(event_tag);
    let mut prev = (root_uuid, event_out.to_string());

    let chain_len = rng.random_range(1..=max_chain);
    for step in 0..chain_len {
        let (action_tag, input_pin) = ACTION_TAGS[rng.random_range(0..ACTION_TAGS.len())];
        let uuid = format!("action-{root_index}-{step}");
        project.nodes.push(node(action_tag, &uuid, Map::new()));
        project.connections.push(Connection {
            start_uuid: prev.0.clone(),
            end_uuid: uuid.clone(),
            start_pin: prev.1.clone(),
            end_pin: input_pin.to_string(),
        });
        prev = (uuid, "Done".to_string());
    }
}

fn event_data_pin(tag: &str) -> &'static str {
    match tag {
        "TimerEvent" => "Fired",
        "ButtonEvent" => "Pressed",
        _ => "Reading",
    }
}

fn node(tag: &str, uuid: &str, metadata: Map<String, Value>) -> Node {
    Node {
        type_tag: tag.to_string(),
        x: 0.0,
        y: 0.0,
        uuid: uuid.to_string(),
        value: Value::Null,
        metadata,
    }
}
