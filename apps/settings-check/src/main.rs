// apps/settings-check/src/main.rs

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use settings_lib::{SettingsProvider, Tier};

const SERVICE: &str = "settings-check";
const ENV: &str = "ENV";

fn command() -> Command {
    Command::new(SERVICE)
        .about("Load the application settings for a tier, as a serving process would at startup")
        .arg(
            Arg::new("tier")
                .long("tier")
                .env(ENV)
                .required(true)
                .help("Deployment tier: development or production"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the redacted settings as JSON"),
        )
}

fn main() {
    // A missing .env file is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();

    let matches = command().get_matches();

    init_tracing(
        matches
            .get_one::<String>("tier")
            .and_then(|tier| tier.parse::<Tier>().ok()),
    );

    if let Err(e) = run(&matches) {
        tracing::error!(service = SERVICE, error = %e, "settings failed to load");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let tier = matches
        .get_one::<String>("tier")
        .ok_or_else(|| format!("--tier or the {} environment variable must be set", ENV))?;

    let settings = SettingsProvider::from_env().load(tier)?;

    let summary = settings.summary();
    tracing::info!(
        service = SERVICE,
        tier = %summary.tier,
        debug_enabled = summary.debug_enabled,
        db_host = %summary.db_host,
        db_name = %summary.db_name,
        database_url_source = ?summary.database_url_source,
        queue_name = %summary.queue_name,
        notification_api_key_set = settings.has_notification_api_key(),
        "settings ready"
    );

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn init_tracing(tier: Option<Tier>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if tier == Some(Tier::Development) {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }
}
