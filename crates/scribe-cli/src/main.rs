// Copyright (c) 2026 - present The scribe developers
// SPDX-License-Identifier: MIT

//! scribe: CLI for summarizing recent git changes into a changelog
//!
//! Validates its inputs, wires the `get_commits` tool and the Groq model
//! into the conversation loop, runs one thread to completion, and prints
//! the model's final content. Fatal failures produce a single error line
//! on stderr and a non-zero exit.

use clap::Parser;
use tracing::info;
use uuid::Uuid;

use scribe_agent::{Agent, ChatMessage, GroqModel, MemorySaver, ToolRegistry, get_commits_tool};
use scribe_git::{GitHistory, HistoryOptions};

mod config;

use config::Config;

const SYSTEM_PROMPT: &str = "You are an expert in generating customer facing changelogs. \
    You are provided the tools to look at the recent commits in a git repository. \
    Please focus on providing context for the changes, and the motivation for the changes.";

const USER_PROMPT: &str = "Please summarize the recent work done. Provide only a bulleted \
    list. Add the author at the end of the list item in the format: - [@author]";

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    let history = GitHistory::open(&config.filepath)?;
    let options = HistoryOptions {
        window: config.window(),
        exclude: config.exclude.clone(),
    };
    info!(repo = %config.filepath.display(), ?options, "Collecting changelog");

    let mut registry = ToolRegistry::new();
    let (descriptor, handler) = get_commits_tool(history, options);
    registry.register(descriptor, handler);

    let model = GroqModel::new(&config.base_url, &config.api_key, &config.model);
    let mut agent =
        Agent::new(model, registry, MemorySaver::new()).with_max_turns(config.max_turns);

    let thread_id = Uuid::new_v4().to_string();
    let summary = agent
        .run(
            &thread_id,
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(USER_PROMPT),
            ],
        )
        .await?;

    println!("{summary}");
    Ok(())
}
