use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reviews::snippet_form::parse_bulk_import;
use reviews::{
    ApiError, BulkImportError, BulkImportRequest, BulkImportResponse, NewSnippetForm, Snippet, SnippetFormError, Stats,
};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Form(#[from] SnippetFormError),
    #[error("{0}")]
    BulkImport(#[from] BulkImportError),
    #[error("no code available for review")]
    NothingLeft,
    #[error("io failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "review-cli", about = "Code review platform REST client")]
struct Cli {
    #[arg(long, env = "REVIEW_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe `GET /health`.
    Health,
    /// Print platform counters.
    Stats,
    Codes(CodesCommand),
    Reviews(ReviewsCommand),
}

#[derive(Args, Debug)]
struct CodesCommand {
    #[command(subcommand)]
    command: CodesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CodesSubcommand {
    List {
        #[arg(long, default_value_t = false, help = "Print raw JSON instead of a table")]
        json: bool,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        language: String,
        #[arg(long, help = "Source file path, or - for stdin")]
        code: String,
        #[arg(long, default_value = "3")]
        max_reviews: String,
    },
    /// Import a JSON array of snippet objects.
    Import {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    Random {
        #[arg(long, help = "Only return snippets this reviewer has not reviewed")]
        email: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReviewsSubcommand {
    /// Download every review as CSV.
    Export {
        #[arg(long, help = "Output path; defaults to code_reviews_<date>.csv")]
        out: Option<PathBuf>,
    },
}

/// REST client bound to one backend base URL.
struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    fn new(base_url: &str) -> Result<Self, CliError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder, path: &str) -> Result<reqwest::Response, CliError> {
        tracing::debug!(path, "sending request");
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(path, status = status.as_u16(), "request rejected");
        Err(ApiError::rejected(status.as_u16(), &body).into())
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, CliError> {
        self.send(self.http.get(self.url(path)), path).await
    }

    async fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<reqwest::Response, CliError> {
        self.send(self.http.post(self.url(path)).json(body), path).await
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url)?;

    match cli.command {
        Command::Health => run_health(&client).await,
        Command::Stats => run_stats(&client).await,
        Command::Codes(codes) => run_codes(&client, codes).await,
        Command::Reviews(reviews) => run_reviews(&client, reviews).await,
    }
}

async fn run_health(client: &ApiClient) -> Result<(), CliError> {
    client.get("/health").await?;
    println!("ok");
    Ok(())
}

async fn run_stats(client: &ApiClient) -> Result<(), CliError> {
    let stats = client.get("/stats").await?.json::<Stats>().await?;
    println!("{}", format_stats(&stats));
    Ok(())
}

async fn run_codes(client: &ApiClient, codes: CodesCommand) -> Result<(), CliError> {
    match codes.command {
        CodesSubcommand::List { json } => {
            let response = client.get("/codes").await?;
            if json {
                return print_json(&response.json::<Value>().await?);
            }
            let snippets = response.json::<Vec<Snippet>>().await?;
            for snippet in &snippets {
                println!("{}", format_snippet_row(snippet));
            }
            tracing::info!(count = snippets.len(), "listed codes");
            Ok(())
        }
        CodesSubcommand::Create { title, language, code, max_reviews } => {
            let form = NewSnippetForm { title, code: read_input(&code)?, language, max_reviews };
            let snippet = form.validate()?;
            client.post_json("/codes", &snippet).await?;
            println!("Code added successfully!");
            Ok(())
        }
        CodesSubcommand::Import { input } => {
            let codes = parse_bulk_import(&read_input(&input)?)?;
            let response = client.post_json("/codes/bulk", &BulkImportRequest { codes }).await?;
            let added = response.json::<BulkImportResponse>().await?;
            println!("{} codes added successfully!", added.added_count);
            Ok(())
        }
        CodesSubcommand::Random { email } => {
            let email = email.map(|e| e.trim().to_owned()).filter(|e| !e.is_empty());
            let mut request = client.http.get(client.url("/codes/random"));
            if let Some(email) = &email {
                request = request.query(&[("email", email)]);
            }
            let snippet = match client.send(request, "/codes/random").await {
                Ok(response) => response.json::<Snippet>().await?,
                Err(CliError::Api(err)) if err.is_not_found() => return Err(CliError::NothingLeft),
                Err(err) => return Err(err),
            };
            println!("{}", format_snippet_row(&snippet));
            println!("{}", numbered_source(&snippet));
            Ok(())
        }
    }
}

async fn run_reviews(client: &ApiClient, reviews: ReviewsCommand) -> Result<(), CliError> {
    match reviews.command {
        ReviewsSubcommand::Export { out } => {
            let bytes = client.get("/reviews/export").await?.bytes().await?;
            let path = out.unwrap_or_else(|| PathBuf::from(export_filename(time::OffsetDateTime::now_utc().date())));
            fs::write(&path, &bytes)?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "exported reviews");
            println!("Reviews exported successfully!");
            Ok(())
        }
    }
}

/// Read a whole file, or stdin for `-`.
fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(fs::read_to_string(input)?)
}

fn export_filename(date: time::Date) -> String {
    format!("code_reviews_{date}.csv")
}

fn format_stats(stats: &Stats) -> String {
    format!(
        "Total Codes: {}\nTotal Reviews: {}\nCompleted Codes: {}\nPending Codes: {}",
        stats.total_codes, stats.total_reviews, stats.completed_codes, stats.pending_codes
    )
}

fn format_snippet_row(snippet: &Snippet) -> String {
    let status = if snippet.is_completed { "Completed" } else { "Pending" };
    format!(
        "{}  {:<10}  Reviews: {}/{}  {:<9}  {}",
        snippet.id, snippet.language, snippet.review_count, snippet.max_reviews, status, snippet.title
    )
}

fn numbered_source(snippet: &Snippet) -> String {
    let width = snippet.line_count().to_string().len();
    snippet
        .lines()
        .enumerate()
        .map(|(index, line)| format!("{:>width$}  {line}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
