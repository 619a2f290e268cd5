use clap::Parser;
use keiro::compiler::{Compiler, build_forest, resolve_links};
use keiro::error::{CompileError, ScriptError};
use keiro::graph::Project;
use keiro::kinds::KindRegistry;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Compile a node-editor project into an IoT execution script
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the project JSON file saved by the editor
    project_path: PathBuf,

    /// Path to write the compiled script JSON to
    #[arg(short, long, default_value = "script.json")]
    output: PathBuf,

    /// Project identifier stamped into the output script
    #[arg(long, default_value_t = 1)]
    id: i64,

    /// Print the execution forest before assembling commands
    #[arg(long)]
    forest: bool,

    /// Directory against which relative input/output paths are resolved
    #[arg(long)]
    default_dir: Option<PathBuf>,

    /// Additional device action kinds to register, by device name
    #[arg(long = "device")]
    devices: Vec<String>,

    /// Enable compile-pass tracing output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let project_path = resolve_path(&cli.project_path, cli.default_dir.as_deref());
    let output_path = resolve_path(&cli.output, cli.default_dir.as_deref());

    let total_start = Instant::now();

    // --- 1. Load ---
    let project = match Project::from_file(&project_path) {
        Ok(project) => project,
        Err(e) => return exit_file_error(&e),
    };
    println!(
        "Loaded project '{}' ({} nodes, {} connections)",
        project_path.display(),
        project.nodes.len(),
        project.connections.len()
    );

    // --- 2. Resolve against the kind catalog ---
    let mut registry = KindRegistry::with_defaults();
    for device in &cli.devices {
        registry = registry.with_device(device);
    }
    let graph = match project.resolve(&registry) {
        Ok(graph) => graph,
        Err(e) => return exit_graph_error(&e.into()),
    };

    // --- 3. Compile ---
    let compile_start = Instant::now();

    if cli.forest {
        let forest = resolve_links(graph.connections())
            .and_then(|resolution| build_forest(&resolution.links));
        match forest {
            Ok(forest) => {
                println!("\nExecution forest:");
                print!("{forest}");
            }
            Err(e) => return exit_graph_error(&e),
        }
    }

    let script = match Compiler::builder(graph).project_id(cli.id).build().compile() {
        Ok(script) => script,
        Err(e) => return exit_graph_error(&e),
    };
    let compile_duration = compile_start.elapsed();

    println!(
        "\nCompilation successful! {} command(s) generated in {:?}",
        script.commands.len(),
        compile_duration
    );
    for command in &script.commands {
        println!("  -> {command}");
    }

    // --- 4. Write the script ---
    if let Err(e) = script.save(&output_path) {
        return exit_file_error(&e);
    }
    println!("\nWrote script to '{}'", output_path.display());
    println!("Total: {:?}", total_start.elapsed());

    ExitCode::SUCCESS
}

fn resolve_path(path: &Path, default_dir: Option<&Path>) -> PathBuf {
    match default_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// File-level failures: the user should re-select or fix the file.
fn exit_file_error(error: &ScriptError) -> ExitCode {
    eprintln!("\nFile error: {error}");
    ExitCode::from(2)
}

/// Graph-level failures: the user should fix the graph in the editor.
fn exit_graph_error(error: &CompileError) -> ExitCode {
    eprintln!("\nGraph error: {error}");
    ExitCode::FAILURE
}
