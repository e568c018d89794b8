//! `content-cli`: terminal client for the content platform backend.
//!
//! Shares the session model and REST contract with the browser app; the token
//! lives in a file instead of `localStorage`.

mod store;
mod transport;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use contract::endpoints::Feedback;
use contract::types::{DEFAULT_ROLE, DEFAULT_WORD_COUNT, ReadingBehavior, RegisterRequest};
use contract::{ApiClient, ApiError, BlogGenerationRequest, Credentials, DEFAULT_BASE_URL, Session, SessionError, Tone};
use serde_json::Value;

use store::FileTokenStore;
use transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("http client init failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "content-cli", about = "Content platform API CLI")]
struct Cli {
    #[arg(long, env = "CONTENT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "CONTENT_TOKEN_FILE", default_value = ".content-platform-token")]
    token_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Backend health.
    Status,
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored token.
    Logout,
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = DEFAULT_ROLE)]
        role: String,
    },
    Whoami,
    Blog(BlogCommand),
    News(NewsCommand),
    Email(EmailCommand),
}

#[derive(Args, Debug)]
struct BlogCommand {
    #[command(subcommand)]
    command: BlogSubcommand,
}

#[derive(Subcommand, Debug)]
enum BlogSubcommand {
    Generate {
        #[arg(long)]
        keywords: String,
        #[arg(long, default_value_t = Tone::Professional)]
        tone: Tone,
        #[arg(long, default_value_t = DEFAULT_WORD_COUNT)]
        word_count: u32,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        focus_keyword: Option<String>,
        /// Persist the generated article as a draft.
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    List,
    Get {
        id: i64,
    },
    Publish {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct NewsCommand {
    #[command(subcommand)]
    command: NewsSubcommand,
}

#[derive(Subcommand, Debug)]
enum NewsSubcommand {
    Feed,
    Like {
        id: String,
    },
    Dislike {
        id: String,
    },
    Bookmark {
        id: String,
    },
    Bookmarks,
    Reading {
        #[arg(long)]
        article_id: String,
        #[arg(long)]
        time_spent: u64,
        #[arg(long)]
        scroll_depth: f64,
    },
}

#[derive(Args, Debug)]
struct EmailCommand {
    #[command(subcommand)]
    command: EmailSubcommand,
}

#[derive(Subcommand, Debug)]
enum EmailSubcommand {
    Templates {
        #[command(subcommand)]
        command: Option<TemplateSubcommand>,
    },
    Campaigns {
        #[command(subcommand)]
        command: Option<CampaignSubcommand>,
    },
}

#[derive(Subcommand, Debug)]
enum TemplateSubcommand {
    List,
    Get {
        id: i64,
    },
    Save {
        #[arg(long)]
        data: String,
    },
}

#[derive(Subcommand, Debug)]
enum CampaignSubcommand {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Analytics {
        id: i64,
    },
    Schedule {
        id: i64,
        #[arg(long)]
        data: String,
    },
}

type Client = ApiClient<ReqwestTransport, FileTokenStore>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::new(FileTokenStore::new(&cli.token_file));
    let client = ApiClient::new(cli.base_url, ReqwestTransport::new()?, session);

    let result = run(&client, cli.command).await;
    if let Err(CliError::Api(ApiError::Unauthorized)) = &result {
        tracing::warn!(path = %client.session().store().path().display(), "token rejected and removed");
    }
    result
}

async fn run(client: &Client, command: Command) -> Result<(), CliError> {
    match command {
        Command::Status => print_json(&client.execute(contract::endpoints::backend_status()).await?),
        Command::Login { username, password } => {
            let response = client.login(&Credentials { username, password }).await?;
            tracing::info!("logged in");
            print_json(&serde_json::to_value(response.user)?)
        }
        Command::Logout => {
            client.session().logout()?;
            println!("logged out");
            Ok(())
        }
        Command::Register { username, email, password, role } => {
            let request = RegisterRequest { username, email, password, role };
            print_json(&client.register(&request).await?)
        }
        Command::Whoami => print_json(&serde_json::to_value(client.current_user().await?)?),
        Command::Blog(blog) => run_blog(client, blog.command).await,
        Command::News(news) => run_news(client, news.command).await,
        Command::Email(email) => run_email(client, email.command).await,
    }
}

async fn run_blog(client: &Client, command: BlogSubcommand) -> Result<(), CliError> {
    match command {
        BlogSubcommand::Generate { keywords, tone, word_count, audience, focus_keyword, save } => {
            let request = generation_request(keywords, tone, word_count, audience, focus_keyword);
            request.validate().map_err(ApiError::Validation)?;
            if !request.word_count_in_range() {
                tracing::warn!(word_count, "word count outside the suggested 100..=3000 range");
            }
            let mut article = client.generate_blog(&request).await?;
            if save {
                let saved = client.save_blog(&article).await?;
                article.id = saved.id.or(article.id);
            }
            print_json(&serde_json::to_value(article)?)
        }
        BlogSubcommand::List => print_json(&serde_json::to_value(client.my_blogs().await?)?),
        BlogSubcommand::Get { id } => print_json(&serde_json::to_value(client.blog(id).await?)?),
        BlogSubcommand::Publish { id } => print_json(&client.publish_blog(id).await?),
    }
}

async fn run_news(client: &Client, command: NewsSubcommand) -> Result<(), CliError> {
    let body = match command {
        NewsSubcommand::Feed => client.news_feed().await?,
        NewsSubcommand::Like { id } => client.article_feedback(&id, Feedback::Like).await?,
        NewsSubcommand::Dislike { id } => client.article_feedback(&id, Feedback::Dislike).await?,
        NewsSubcommand::Bookmark { id } => client.article_feedback(&id, Feedback::Bookmark).await?,
        NewsSubcommand::Bookmarks => client.bookmarks().await?,
        NewsSubcommand::Reading { article_id, time_spent, scroll_depth } => {
            client.reading_behavior(&ReadingBehavior { article_id, time_spent, scroll_depth }).await?
        }
    };
    print_json(&body)
}

async fn run_email(client: &Client, command: EmailSubcommand) -> Result<(), CliError> {
    let body = match command {
        EmailSubcommand::Templates { command } => match command.unwrap_or(TemplateSubcommand::List) {
            TemplateSubcommand::List => client.templates().await?,
            TemplateSubcommand::Get { id } => client.template(id).await?,
            TemplateSubcommand::Save { data } => client.save_template(parse_payload(&data)?).await?,
        },
        EmailSubcommand::Campaigns { command } => match command.unwrap_or(CampaignSubcommand::List) {
            CampaignSubcommand::List => client.campaigns().await?,
            CampaignSubcommand::Create { data } => client.create_campaign(parse_payload(&data)?).await?,
            CampaignSubcommand::Analytics { id } => client.campaign_analytics(id).await?,
            CampaignSubcommand::Schedule { id, data } => client.schedule_campaign(id, parse_payload(&data)?).await?,
        },
    };
    print_json(&body)
}

fn generation_request(
    keywords: String,
    tone: Tone,
    word_count: u32,
    audience: Option<String>,
    focus_keyword: Option<String>,
) -> BlogGenerationRequest {
    BlogGenerationRequest {
        keywords,
        tone,
        word_count,
        target_audience: audience.as_deref().and_then(contract::types::non_blank),
        focus_keyword: focus_keyword.as_deref().and_then(contract::types::non_blank),
    }
}

fn parse_payload(data: &str) -> Result<Value, CliError> {
    Ok(serde_json::from_str::<Value>(data)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
