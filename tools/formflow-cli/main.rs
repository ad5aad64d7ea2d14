use clap::{Parser, Subcommand};
use formflow::logging::init_tracing;
use formflow::prelude::*;
use itertools::Itertools;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Manage branching form definitions and walk through them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding *FormFlow.json documents (overrides FORMFLOW_DATA_DIR)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List stored forms
    List,
    /// Print the questions of a stored form
    Show { name: String },
    /// Check a stored form for structural problems
    Validate { name: String },
    /// Save a form document read from a JSON file
    Save { path: PathBuf },
    /// Delete a stored form
    Delete { name: String },
    /// Answer a form interactively (defaults to FORMFLOW_DEFAULT_FORM)
    Take { name: Option<String> },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let mut config = FlowConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    let store = JsonFileStore::new(&config.data_dir);

    match cli.command {
        Command::List => run_list(&store),
        Command::Show { name } => run_show(&store, &name),
        Command::Validate { name } => run_validate(&store, &name),
        Command::Save { path } => run_save(&store, path),
        Command::Delete { name } => run_delete(&store, &name),
        Command::Take { name } => {
            let name = name.or(config.default_form).unwrap_or_else(|| {
                exit_with_error("A form name is required when FORMFLOW_DEFAULT_FORM is not set.")
            });
            run_take(&store, &name);
        }
    }
}

fn run_list(store: &JsonFileStore) {
    let summaries = store.summaries();
    if summaries.is_empty() {
        println!("No forms stored in '{}'.", store.data_dir().display());
        return;
    }

    println!("{:<30} {:<40} {:>9}", "Title", "File", "Questions");
    for summary in summaries {
        println!(
            "{:<30} {:<40} {:>9}",
            summary.title, summary.file_name, summary.question_count
        );
    }
}

fn run_show(store: &JsonFileStore, name: &str) {
    let graph = read_graph(store, name);
    println!("Form: {}", graph.title());
    for question in graph.questions() {
        let flag = if question.required { " *" } else { "" };
        println!(
            "\n[{}] ({}){} {}",
            question.id, question.kind, flag, question.text
        );
        if let Some(help) = &question.help_text {
            println!("    {}", help);
        }
        for option in &question.options {
            let route = option
                .destination
                .map_or("next".to_string(), |d| d.to_string());
            println!("    - {} -> {}", option.text, route);
        }
    }
}

fn run_validate(store: &JsonFileStore, name: &str) {
    let graph = read_graph(store, name);
    let form = Form::new(graph.title(), graph.questions().to_vec());
    let issues = form.validate();
    if issues.is_empty() {
        println!("No issues found in '{}'.", name);
        return;
    }

    println!("{} issue(s) found in '{}':", issues.len(), name);
    println!("  - {}", issues.iter().join("\n  - "));
    std::process::exit(2);
}

fn run_save(store: &JsonFileStore, path: PathBuf) {
    let json = fs::read_to_string(&path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read form file '{}': {}", path.display(), e))
    });
    let form = formflow::form::parse_form(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse form JSON: {}", e)));

    for issue in form.validate() {
        println!("Warning: {}", issue);
    }

    let file_name = store
        .save(&form)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save form: {}", e)));
    println!("Saved '{}' as {}", form.title, file_name);
}

fn run_delete(store: &JsonFileStore, name: &str) {
    store
        .delete(name)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to delete form: {}", e)));
    println!("Deleted '{}'", name);
}

/// Walks the user through a form, one prompt per question.
fn run_take(store: &JsonFileStore, name: &str) {
    let handle = GraphHandle::default();
    if let Err(e) = handle.reload(store, name) {
        exit_with_error(&format!("Form unavailable: {}", e));
    }
    let engine = FlowEngine::new(handle);

    println!("--- {} ---", engine.graph().snapshot().title());
    println!("Type :back to go back, :restart to start over, :quit to leave.");

    let mut state = engine.start();
    loop {
        match state.status {
            FlowStatus::AtQuestion(_) => {}
            FlowStatus::AtEnd(_) => {
                if let Some(question) = &state.current_question {
                    println!("\n{}", question.text);
                }
                print_answers(&state);
                break;
            }
            FlowStatus::Unavailable { question_id } => {
                println!("\nForm unavailable: question {} not found.", question_id);
                break;
            }
            FlowStatus::NotStarted => break,
        }

        let Some(question) = state.current_question.clone() else {
            break;
        };
        render_question(&question);

        let input = prompt_for_input("Answer", state.previous_answer.as_deref());
        match input.as_str() {
            ":quit" => break,
            ":back" => state = engine.go_back(state.history),
            ":restart" => state = engine.restart(),
            _ => {
                let answer = parse_answer(&question, input);
                match engine.submit(state.history.clone(), question.id, answer) {
                    Ok(next) => state = next,
                    Err(e) => println!("  ! {}", e),
                }
            }
        }
    }
}

fn render_question(question: &Question) {
    let flag = if question.required { " (required)" } else { "" };
    println!("\n{}{}", question.text, flag);
    if let Some(help) = &question.help_text {
        println!("  {}", help);
    }
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}: {}", i + 1, option.text);
    }
}

/// Numbers pick an option on choice questions; anything else is taken as text.
fn parse_answer(question: &Question, input: String) -> Answer {
    if input.is_empty() {
        return Answer::Skip;
    }
    if !question.options.is_empty() {
        if let Ok(n) = input.parse::<usize>() {
            if n >= 1 {
                return Answer::Choice(n - 1);
            }
        }
    }
    Answer::Text(input)
}

fn print_answers(state: &TraversalState) {
    println!("\n--- Your Answers ---");
    for answer in state.user_answers() {
        println!("{}: {}", answer.question_text, answer.answer);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        Ok(0) => return ":quit".to_string(),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn read_graph(store: &JsonFileStore, name: &str) -> QuestionGraph {
    store
        .read(name)
        .into_result()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load form: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
