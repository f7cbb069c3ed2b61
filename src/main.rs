use clap::{Args, Parser, Subcommand};
use profile_view::cookie::MemoryCookieStore;
use profile_view::session::{AUTHORIZATION_COOKIE, SESSION_COOKIES};
use profile_view::{
    Config, ConfigError, CookieStore, CookieUserInfoReader, DecodeError, PageView, ProfileClient, ProfileError,
    ProfilePage, ProfileSource, UserInfo, decode_user_info, encode_user_info, session,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "profile-view", about = "Resolve the login/profile view from session cookies")]
struct Cli {
    /// Raw `Cookie` header, e.g. `Authorization=abc; userinfo=...`.
    #[arg(long, env = "PROFILE_VIEW_COOKIES", default_value = "")]
    cookies: String,

    /// Overrides `PROFILE_VIEW_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides `PROFILE_VIEW_COOKIE_NAME`.
    #[arg(long)]
    cookie_name: Option<String>,

    /// Overrides `PROFILE_VIEW_SOURCE` (`remote` or `cookie`).
    #[arg(long)]
    source: Option<ProfileSource>,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run page load with the configured source.
    Load,
    /// Resolve the view from the userinfo cookie only.
    Resolve,
    /// Decode a raw userinfo cookie value.
    Decode { value: String },
    /// Encode a userinfo cookie value.
    Encode(EncodeArgs),
    /// Print the login navigation target.
    Login,
    /// Clear the session cookies and print the resulting Set-Cookie directives.
    Logout,
    /// Fetch `/github/profile`; `--json` prints the raw response.
    Profile,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    avatar_url: Option<String>,
    #[arg(long)]
    html_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(base_url) = &cli.base_url {
        base_url.trim_end_matches('/').clone_into(&mut config.base_url);
    }
    if let Some(cookie_name) = &cli.cookie_name {
        config.cookie_name.clone_from(cookie_name);
    }
    if let Some(source) = cli.source {
        config.source = source;
    }
    let store = MemoryCookieStore::from_header(&cli.cookies);

    match cli.command {
        Command::Load => {
            let mut page = ProfilePage::new(config, store)?;
            page.load().await;
            print_view(&page.view(), cli.json)
        }
        Command::Resolve => {
            let state = CookieUserInfoReader::new(config.cookie_name).resolve_store(&store);
            print_view(&PageView::render(&state), cli.json)
        }
        Command::Decode { value } => {
            let user = decode_user_info(&value)?;
            print_json(&user)
        }
        Command::Encode(args) => {
            let user = UserInfo { name: args.name, avatar_url: args.avatar_url, html_url: args.html_url };
            println!("{}", encode_user_info(&user)?);
            Ok(())
        }
        Command::Login => {
            println!("{}", session::login_location(&config.base_url));
            Ok(())
        }
        Command::Logout => run_logout(&config, store, cli.json),
        Command::Profile => run_profile(&config, &store, cli.json).await,
    }
}

fn run_logout(config: &Config, mut store: MemoryCookieStore, json: bool) -> Result<(), CliError> {
    let mut cookies: Vec<&str> = SESSION_COOKIES.to_vec();
    if !cookies.contains(&config.cookie_name.as_str()) {
        cookies.push(&config.cookie_name);
    }
    let state = session::logout(&mut store, &cookies);
    let directives: Vec<String> = store.directives().iter().map(ToString::to_string).collect();

    if json {
        return print_json(&serde_json::json!({
            "set_cookie": directives,
            "cookies": store.to_header(),
            "view": PageView::render(&state),
        }));
    }
    for directive in &directives {
        println!("Set-Cookie: {directive}");
    }
    print!("{}", PageView::render(&state));
    Ok(())
}

async fn run_profile(config: &Config, store: &MemoryCookieStore, json: bool) -> Result<(), CliError> {
    let client = ProfileClient::new(&config.base_url, config.timeouts)?;
    let token = store.get(AUTHORIZATION_COOKIE);
    let profile = client.fetch(token.as_deref()).await?;

    if json {
        return print_json(&profile.raw);
    }
    print!("{}", profile.view());
    if profile.html_url.is_none() {
        tracing::warn!("profile response has no html_url");
    }
    Ok(())
}

fn print_view(view: &PageView, json: bool) -> Result<(), CliError> {
    if json {
        return print_json(view);
    }
    print!("{view}");
    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
