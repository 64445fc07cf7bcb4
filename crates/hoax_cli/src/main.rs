use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use hoax_core::detector::DEFAULT_THRESHOLD;
use hoax_core::{Article, Config, DetectionResult, Detector, Generator, NewsDetector};
use hoax_web::{AppState, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use tracing::{info, Level};

#[derive(Parser, Debug)]
/// Generate template news articles and score text for fake-news markers
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for reproducible generation
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Scores strictly above this are flagged as fake
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate one article
    Generate {
        /// conspiracy, sensational, clickbait or random
        #[arg(short, long, default_value = "random")]
        category: String,
        #[arg(long)]
        json: bool,
    },
    /// Score a piece of text
    Detect {
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        json: bool,
    },
    /// Generate an article and run it through the detector
    Check {
        #[arg(short, long, default_value = "random")]
        category: String,
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Numbered console menu
    Interactive,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn print_article(out: &mut impl Write, article: &Article) -> io::Result<()> {
    writeln!(out, "\n📰 Generated Article:")?;
    writeln!(out, "Title: {}", article.title)?;
    writeln!(out, "Author: {}", article.author)?;
    writeln!(out, "Source: {}", article.source)?;
    writeln!(out, "Date: {}", article.publish_date.format("%Y-%m-%d"))?;
    writeln!(out, "Category: {}", article.category)?;
    writeln!(out, "\nContent:\n{}", article.content)
}

fn print_detection(out: &mut impl Write, result: &DetectionResult) -> io::Result<()> {
    let verdict = if result.is_fake { "❌ YES" } else { "✅ NO" };
    writeln!(out, "\n📊 Detection Results:")?;
    writeln!(out, "Fake News: {}", verdict)?;
    writeln!(out, "Confidence: {:.1}%", result.confidence_score * 100.0)?;
    writeln!(out, "Explanation: {}", result.explanation)
}

fn print_check(
    out: &mut impl Write,
    article: &Article,
    result: &DetectionResult,
) -> io::Result<()> {
    print_article(out, article)?;
    print_detection(out, result)?;
    let correct = result.is_fake == article.is_fake;
    writeln!(out, "Detection Correct: {}", if correct { "✅ YES" } else { "❌ NO" })
}

/// Reads one trimmed line after showing `prompt`. `None` on end of input.
fn prompt_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_category(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<String>> {
    let category = prompt_line(
        input,
        out,
        "Enter category (conspiracy/sensational/clickbait/random): ",
    )?;
    Ok(category.map(|c| if c.is_empty() { "random".to_string() } else { c }))
}

/// The numbered menu. Stops on choice 4 or at end of input.
fn interactive(
    config: &Config,
    generator: &Generator,
    detector: &dyn NewsDetector,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "🤖 Fake News Generator and Detector")?;
    writeln!(out, "{}", "=".repeat(50))?;

    loop {
        writeln!(out, "\nOptions:")?;
        writeln!(out, "1. Generate fake news")?;
        writeln!(out, "2. Detect fake news")?;
        writeln!(out, "3. Generate and detect")?;
        writeln!(out, "4. Exit")?;

        let Some(choice) = prompt_line(input, out, "\nEnter your choice (1-4): ")? else {
            break;
        };

        match choice.as_str() {
            "1" | "3" => {
                let Some(category) = prompt_category(input, out)? else {
                    break;
                };
                let article = match generator.generate(&category, &mut config.rng()) {
                    Ok(article) => article,
                    Err(e) => {
                        writeln!(out, "❌ {}", e)?;
                        continue;
                    }
                };
                if choice == "1" {
                    print_article(out, &article)?;
                } else {
                    let result = detector.detect(&article.content, &article.title);
                    print_check(out, &article, &result)?;
                }
            }
            "2" => {
                let Some(title) = prompt_line(input, out, "Enter article title (optional): ")?
                else {
                    break;
                };
                let Some(content) = prompt_line(input, out, "Enter article content: ")? else {
                    break;
                };
                if content.is_empty() {
                    writeln!(out, "❌ Please provide article content")?;
                    continue;
                }
                print_detection(out, &detector.detect(&content, &title))?;
            }
            "4" => break,
            _ => writeln!(out, "❌ Invalid choice. Please enter 1-4.")?,
        }
    }

    writeln!(out, "👋 Goodbye!")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::default()
        .with_seed(cli.seed)
        .with_threshold(cli.threshold);
    let generator = Generator::new().context("failed to build article generator")?;
    let detector = Detector::new(config.detector);
    info!(
        "🧠 Detector initialized (using {}, threshold {})",
        detector.name(),
        detector.config().threshold
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate { category, json } => {
            let article = generator.generate(&category, &mut config.rng())?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&article)?)?;
            } else {
                print_article(&mut out, &article)?;
            }
        }
        Commands::Detect {
            content,
            title,
            json,
        } => {
            if content.trim().is_empty() {
                bail!("Content is required");
            }
            let result = detector.detect(&content, &title);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                print_detection(&mut out, &result)?;
            }
        }
        Commands::Check { category, json } => {
            let article = generator.generate(&category, &mut config.rng())?;
            let result = detector.detect(&article.content, &article.title);
            if json {
                let output = serde_json::json!({
                    "article": article,
                    "detection": result,
                    "detection_correct": result.is_fake == article.is_fake,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
            } else {
                print_check(&mut out, &article, &result)?;
            }
        }
        Commands::Serve { host, port } => {
            let state = AppState::new(config)?;
            hoax_web::serve(&ServerConfig { host, port }, state).await?;
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            interactive(&config, &generator, &detector, &mut stdin.lock(), &mut out)?
        }
    }

    Ok(())
}
