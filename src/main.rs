use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use shorecast::{
    Credentials, DateRange, LatLon, ParseError, ShorecastError, SurfClient, SurfConfig,
    TimestampPolicy, WeatherClient, WeatherConfig, DEFAULT_SURF_ARCHIVE_URL, DEFAULT_SURF_DATA_DIR,
    DEFAULT_WEATHER_BASE_URL, ISO_DATE_FORMAT, SHORT_US_DATE_FORMAT,
};
use std::path::PathBuf;

/// Collect hourly weather history and surf report archives into CSV files.
#[derive(Parser, Debug)]
#[command(name = "shorecast", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pull hourly weather data from the forecast API (defaults to Wrightsville Beach, NC)
    Weather(WeatherArgs),
    /// Scrape surf reports from the report archive
    Surf(SurfArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    /// Convert UTC timestamps to --timezone, then drop the zone
    Localize,
    /// Subtract --offset_hours from UTC timestamps
    FixedOffset,
}

#[derive(Args, Debug)]
struct WeatherArgs {
    /// API key, sign up at https://darksky.net/dev
    #[arg(long = "api_key")]
    api_key: String,

    /// Latitude
    #[arg(long, default_value_t = 34.2085, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude (locations in the western hemisphere are negative)
    #[arg(long, default_value_t = -77.7964, allow_negative_numbers = true)]
    long: f64,

    /// Start date in form yyyy-mm-dd
    #[arg(long = "start_date", default_value = "2018-01-01")]
    start_date: String,

    /// End date in form yyyy-mm-dd
    #[arg(long = "end_date", default_value = "2018-01-01")]
    end_date: String,

    /// Directory for the csv to be saved
    #[arg(long = "data_dir", default_value = ".")]
    data_dir: PathBuf,

    /// Timezone whose midnights start each requested day
    #[arg(long, default_value = "America/New_York")]
    timezone: String,

    /// How provider timestamps are turned into local times
    #[arg(long = "timestamp_policy", value_enum, default_value_t = PolicyKind::Localize)]
    timestamp_policy: PolicyKind,

    /// Hours subtracted by the fixed-offset policy
    #[arg(long = "offset_hours", default_value_t = 5, allow_negative_numbers = true)]
    offset_hours: i64,

    #[arg(long = "base_url", default_value = DEFAULT_WEATHER_BASE_URL)]
    base_url: String,
}

#[derive(Args, Debug)]
struct SurfArgs {
    /// Start date in form mm/dd/yy
    #[arg(long = "start_date", default_value = "01/01/16")]
    start_date: String,

    /// End date in form mm/dd/yy
    #[arg(long = "end_date", default_value = "12/31/16")]
    end_date: String,

    /// Directory for the csv to be saved
    #[arg(long = "data_dir", default_value = DEFAULT_SURF_DATA_DIR)]
    data_dir: PathBuf,

    #[arg(long = "archive_url", default_value = DEFAULT_SURF_ARCHIVE_URL)]
    archive_url: String,

    /// Basic auth user for the archive
    #[arg(long, requires = "password")]
    username: Option<String>,

    /// Basic auth password for the archive
    #[arg(long, requires = "username")]
    password: Option<String>,
}

fn main() -> Result<(), ShorecastError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = match Cli::parse().command {
        Command::Weather(args) => run_weather(args)?,
        Command::Surf(args) => run_surf(args)?,
    };
    info!("Saved {}", path.display());
    Ok(())
}

fn run_weather(args: WeatherArgs) -> Result<PathBuf, ShorecastError> {
    let range = DateRange::parse(&args.start_date, &args.end_date, ISO_DATE_FORMAT)?;
    let timezone: chrono_tz::Tz = args
        .timezone
        .parse()
        .map_err(|_| ParseError::UnknownTimezone(args.timezone.clone()))?;
    let timestamp_policy = match args.timestamp_policy {
        PolicyKind::Localize => TimestampPolicy::Localize(timezone),
        PolicyKind::FixedOffset => TimestampPolicy::FixedOffset {
            hours: args.offset_hours,
        },
    };

    let config = WeatherConfig::builder()
        .api_key(args.api_key)
        .location(LatLon(args.lat, args.long))
        .timezone(timezone)
        .timestamp_policy(timestamp_policy)
        .base_url(args.base_url)
        .data_dir(args.data_dir)
        .build();

    WeatherClient::new(config).run(&range)
}

fn run_surf(args: SurfArgs) -> Result<PathBuf, ShorecastError> {
    let range = DateRange::parse(&args.start_date, &args.end_date, SHORT_US_DATE_FORMAT)?;
    let credentials = args
        .username
        .zip(args.password)
        .map(|(username, password)| Credentials::new(username, password));

    let config = SurfConfig::builder()
        .archive_url(args.archive_url)
        .maybe_credentials(credentials)
        .data_dir(args.data_dir)
        .build();

    SurfClient::new(config)?.run(&range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_weather_defaults() {
        let cli = Cli::try_parse_from(["shorecast", "weather", "--api_key", "KEY"]).unwrap();
        let Command::Weather(args) = cli.command else {
            panic!("expected weather command");
        };
        assert_eq!(args.lat, 34.2085);
        assert_eq!(args.long, -77.7964);
        assert_eq!(args.start_date, "2018-01-01");
        assert!(matches!(args.timestamp_policy, PolicyKind::Localize));
    }

    #[test]
    fn test_weather_requires_api_key() {
        assert!(Cli::try_parse_from(["shorecast", "weather"]).is_err());
    }

    #[test]
    fn test_negative_longitude() {
        let cli = Cli::try_parse_from([
            "shorecast",
            "weather",
            "--api_key",
            "KEY",
            "--long",
            "-70.5",
            "--timestamp_policy",
            "fixed-offset",
        ])
        .unwrap();
        let Command::Weather(args) = cli.command else {
            panic!("expected weather command");
        };
        assert_eq!(args.long, -70.5);
        assert!(matches!(args.timestamp_policy, PolicyKind::FixedOffset));
    }

    #[test]
    fn test_surf_credentials_come_in_pairs() {
        assert!(Cli::try_parse_from(["shorecast", "surf", "--username", "user"]).is_err());
        let cli = Cli::try_parse_from([
            "shorecast",
            "surf",
            "--username",
            "user",
            "--password",
            "pass",
        ])
        .unwrap();
        let Command::Surf(args) = cli.command else {
            panic!("expected surf command");
        };
        assert_eq!(args.data_dir, PathBuf::from("./wblive_data"));
        assert_eq!(args.username.as_deref(), Some("user"));
    }

    #[test]
    fn test_bad_dates_fail_before_network() {
        let args = SurfArgs {
            start_date: "2016-01-01".to_string(),
            end_date: "12/31/16".to_string(),
            data_dir: PathBuf::from("unused"),
            archive_url: DEFAULT_SURF_ARCHIVE_URL.to_string(),
            username: None,
            password: None,
        };
        assert!(matches!(run_surf(args), Err(ShorecastError::Parse(_))));
    }

    #[test]
    fn test_unknown_timezone() {
        let cli = Cli::try_parse_from([
            "shorecast",
            "weather",
            "--api_key",
            "KEY",
            "--timezone",
            "Mars/Olympus_Mons",
        ])
        .unwrap();
        let Command::Weather(args) = cli.command else {
            panic!("expected weather command");
        };
        assert!(matches!(
            run_weather(args),
            Err(ShorecastError::Parse(ParseError::UnknownTimezone(_)))
        ));
    }
}
