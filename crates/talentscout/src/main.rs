//! TalentScout — initial candidate screening in the terminal.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use talentscout_azure_model::{AzureConfigBuilder, AzureProvider};
use talentscout_core::transcript::Speaker;
use talentscout_core::{ScreeningSession, Step};
use tokio::io::{self, AsyncBufReadExt};

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(endpoint) = env::var("AZURE_OPENAI_ENDPOINT") else {
        eprintln!("AZURE_OPENAI_ENDPOINT environment variable is not set");
        return ExitCode::FAILURE;
    };
    let Ok(api_key) = env::var("AZURE_OPENAI_API_KEY") else {
        eprintln!("AZURE_OPENAI_API_KEY environment variable is not set");
        return ExitCode::FAILURE;
    };
    let Ok(api_version) = env::var("AZURE_OPENAI_API_VERSION") else {
        eprintln!("AZURE_OPENAI_API_VERSION environment variable is not set");
        return ExitCode::FAILURE;
    };
    let Ok(deployment) = env::var("AZURE_OPENAI_DEPLOYMENT_NAME") else {
        eprintln!(
            "AZURE_OPENAI_DEPLOYMENT_NAME environment variable is not set"
        );
        return ExitCode::FAILURE;
    };

    let config = AzureConfigBuilder::with_api_key(api_key, endpoint)
        .with_api_version(api_version)
        .with_deployment(deployment)
        .build();
    let provider = AzureProvider::new(config);

    let mut session = ScreeningSession::with_model_provider(provider);

    println!("{}", "🤖 TalentScout Hiring Assistant".bold());
    println!("{}\n", "AI-powered initial candidate screening".dimmed());

    for entry in session.transcript().entries() {
        if entry.speaker() == Speaker::Assistant {
            print_reply(entry.text());
        }
    }

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let mut stdin = io::BufReader::new(io::stdin());

    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line(&mut stdin).await else {
            break;
        };
        let input = line.trim_end_matches(['\r', '\n']);

        // The remote call only happens on the tech-stack submission,
        // it is the only turn worth a spinner.
        let spinner = (session.step() == Step::CollectingTechStack)
            .then(|| {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(progress_style.clone());
                spinner.set_message("🤔 Generating questions...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner
            });

        let result = session.handle_message(input).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let replies = match result {
            Ok(replies) => replies,
            Err(err) => {
                error!("remote call failed: {err}");
                eprintln!("Something went wrong, please try again later.");
                return ExitCode::FAILURE;
            }
        };
        for reply in &replies {
            print_reply(reply);
        }

        if session.is_complete() {
            break;
        }
    }

    ExitCode::SUCCESS
}

fn print_reply(text: &str) {
    println!("{}🤖 {}", BAR_CHAR.bright_cyan(), text.bright_white());
}

async fn read_line(
    stdin: &mut io::BufReader<io::Stdin>,
) -> Option<String> {
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
