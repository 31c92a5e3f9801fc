use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quizgen_core::{Config, generate_quiz, prompt};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "quizgen")]
#[command(about = "Topic-based question generator CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate questions and answers for a topic
    Generate {
        /// Topic to generate questions about
        topic: String,

        /// Override the chat model
        #[arg(short, long)]
        model: Option<String>,

        /// Print the raw quiz as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print the system prompt sent with every topic
    Prompt,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { topic, model, json } => {
            generate_command(topic, model, json).await?;
        }
        Commands::Prompt => {
            println!("{}", prompt::SYSTEM_PROMPT);
        }
    }

    Ok(())
}

async fn generate_command(topic: String, model: Option<String>, json: bool) -> Result<()> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY is not set. Add it to .env or the environment.")?;

    let mut config = Config::from_env();
    if let Some(model) = model {
        config.model = model;
    }

    info!(
        "Generating {} questions about \"{}\" with {}",
        prompt::QUESTION_COUNT,
        topic,
        config.model
    );

    let quiz = generate_quiz(&topic, &api_key, &config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quiz)?);
        return Ok(());
    }

    if quiz.is_empty() {
        warn!("No questions or answers found");
        return Ok(());
    }

    println!("\n=== Questions and Answers ===\n");

    for (i, (question, answer)) in quiz.qa_pairs().iter().enumerate() {
        println!("Q{}: {}", i + 1, question);
        println!("A{}: {}", i + 1, answer);
        println!();
    }

    let terms = quiz.term_pairs();
    if !terms.is_empty() {
        println!("=== Technical Terms ===\n");

        let width = terms
            .iter()
            .map(|(term, _)| term.chars().count())
            .max()
            .unwrap_or(0);

        for (term, description) in &terms {
            println!("  {:<width$}  {}", term, description);
        }
        println!();
    }

    Ok(())
}
