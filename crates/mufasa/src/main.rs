//! Chat with Mufasa in the terminal.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use mufasa::command::{Command, HELP};
use mufasa::config::Settings;
use mufasa::core::language::{detect_script_family, options_for_selection};
use mufasa::core::mood::MascotState;
use mufasa::core::{ModelClient, Session, SessionBuilder, TurnOutcome};
use mufasa::mascot::{self, Reaction};
use mufasa_sarvam_model::SarvamProvider;
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::select;
use tokio::time::sleep;

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::from_env();
    debug!("starting with {settings:?}");
    if !settings.is_configured() {
        let bar = BAR_CHAR.bright_yellow();
        println!(
            "{bar}⚠️  Using default API key. Set SARVAM_API_KEY environment \
             variable for full functionality."
        );
    }

    let model_client =
        ModelClient::new(SarvamProvider::new(settings.sarvam_config()));
    let mut session = SessionBuilder::with_model_client(model_client)
        .with_language(settings.language())
        .with_auto_translate(settings.auto_translate())
        .build();

    let mut rng = rand::thread_rng();
    let animation = mascot::animation(MascotState::Thinking, &mut rng);
    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(mascot::tick_chars(animation));

    let greeting = mascot::greeting(&mut rng);
    println!("{} {}", greeting.emoji, greeting.message.bright_white().bold());
    println!("{}", session.greeting());
    println!("{}", "Type /help for commands.".dimmed());

    // Buffered lines must survive between reads, or piped input is lost.
    let mut input = BufReader::new(io::stdin()).lines();
    loop {
        print!("{} ", ">".bright_cyan());
        std::io::stdout().flush().ok();

        let Some(line) = read_line(&mut input).await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            println!("{}", session.placeholder().dimmed());
            continue;
        }

        match Command::parse(line) {
            Some(Ok(command)) => {
                run_command(command, &mut session, &progress_style, &mut rng)
                    .await;
            }
            Some(Err(err)) => {
                println!("{}{err}", BAR_CHAR.bright_yellow());
            }
            None => {
                let thinking = format!(
                    "{} {}",
                    session.thinking_message(),
                    mascot::phrase(Reaction::Thinking, &mut rng).dimmed()
                );
                let outcome = with_spinner(
                    &progress_style,
                    &thinking,
                    session.submit(line),
                )
                .await;
                print_outcome(&outcome, &mut rng);
            }
        }
    }
}

async fn run_command(
    command: Command,
    session: &mut Session,
    progress_style: &ProgressStyle,
    rng: &mut impl rand::Rng,
) {
    let bar = BAR_CHAR.bright_cyan();
    match command {
        Command::SetLanguage(language) => {
            session.set_language(language);
            println!("{bar}Language set to {}", language.display_name());
            println!("{bar}{}", session.greeting());
        }
        Command::ListLanguages => {
            for (label, language) in options_for_selection() {
                let marker = if language == session.language() {
                    "*"
                } else {
                    " "
                };
                println!("{bar}{marker} {:<6} {label}", language.code());
            }
        }
        Command::SetAutoTranslate(enabled) => {
            session.set_auto_translate(enabled);
            let state = if enabled { "on" } else { "off" };
            println!("{bar}Auto-translate is {state}");
        }
        Command::Clear => {
            session.clear();
            println!("{bar}Conversation cleared");
            println!("{bar}{}", mascot::phrase(Reaction::Greeting, rng));
        }
        Command::Detect(text) => {
            let script = detect_script_family(&text);
            println!("{bar}Script heuristic: {}", script.display_name());

            let detection = with_spinner(
                progress_style,
                "🔍 Detecting...",
                session.model_client().detect_language(text),
            )
            .await;
            match detection {
                Ok(detected) => {
                    let language =
                        detected.language.as_deref().unwrap_or("unknown");
                    match detected.confidence {
                        Some(confidence) => println!(
                            "{bar}Remote detection: {language} \
                             (confidence {confidence:.2})"
                        ),
                        None => println!("{bar}Remote detection: {language}"),
                    }
                }
                Err(failure) => {
                    println!("{}❌ {failure}", BAR_CHAR.bright_red());
                }
            }
        }
        Command::Ping => {
            let status = with_spinner(
                progress_style,
                "📡 Checking connection...",
                session.model_client().check_connection(),
            )
            .await;
            match status {
                Ok(message) => println!("{bar}✅ {message}"),
                Err(failure) => {
                    println!("{}❌ {failure}", BAR_CHAR.bright_red());
                }
            }
        }
        Command::Help => {
            for (usage, description) in HELP {
                println!("{bar}{:<20} {}", usage.bold(), description);
            }
        }
    }
}

fn print_outcome(outcome: &TurnOutcome, rng: &mut impl rand::Rng) {
    let mood = outcome.mood();
    let emoji = mascot::emoji(mood, rng);
    match outcome {
        TurnOutcome::Rendered { text, .. } => {
            let bar = BAR_CHAR.bright_cyan();
            println!("{bar}{emoji} {}", text.bright_white());
            let phrase = mascot::phrase(Reaction::Success, rng);
            println!("{bar}{}", phrase.dimmed());
        }
        TurnOutcome::Failed { failure, .. } => {
            let bar = BAR_CHAR.bright_red();
            println!("{bar}❌ Error: {}", failure.red());
            println!("{bar}{emoji} {}", mascot::phrase(Reaction::Error, rng));
        }
    }
    println!("{}", mood.description().dimmed());
}

async fn with_spinner<F: Future>(
    style: &ProgressStyle,
    message: &str,
    fut: F,
) -> F::Output {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(style.clone());
    progress_bar.set_message(message.to_owned());

    tokio::pin!(fut);
    let output = loop {
        progress_bar.inc(1);
        let sleep = sleep(Duration::from_millis(100));
        select! {
            output = &mut fut => break output,
            _ = sleep => {}
        }
    };

    // Finish the progress bar before printing anything else.
    progress_bar.finish_and_clear();
    output
}

async fn read_line<R: AsyncBufRead + Unpin>(
    input: &mut Lines<R>,
) -> Option<String> {
    match input.next_line().await {
        Ok(line) => line,
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_line_keeps_buffered_lines() {
        let piped: &[u8] = b"/langs\n/translate on\n/clear\n/help\n";
        let mut input = BufReader::new(piped).lines();

        let mut read = Vec::new();
        while let Some(line) = read_line(&mut input).await {
            read.push(line);
        }
        assert_eq!(read, ["/langs", "/translate on", "/clear", "/help"]);
    }
}
