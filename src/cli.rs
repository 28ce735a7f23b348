use {
    crate::{
        app::Settings,
        config::Config,
        models::{SAMPLE_DEVICE, SAMPLE_TEMP},
    },
    clap::{Arg, ArgMatches, Command, value_parser},
};

/// Upper bound on documents printed by one run.
pub const MAX_LIMIT: i64 = 10;

pub fn cli() -> Command {
    Command::new("cosmos-readings")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Insert one sensor reading and print the first documents of iotdb.readings")
        .arg(
            Arg::new("uri")
                .long("uri")
                .help("Connection string (overrides COSMOS_MONGO_URI)")
                .value_name("URI"),
        )
        .arg(
            Arg::new("username")
                .long("username")
                .help("Account name (overrides COSMOS_MONGO_USERNAME)")
                .value_name("USER"),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Account key (overrides COSMOS_MONGO_PASSWORD)")
                .value_name("PASSWORD"),
        )
        .arg(
            Arg::new("device")
                .long("device")
                .help("Device id stored with the reading")
                .value_name("ID")
                .default_value(SAMPLE_DEVICE),
        )
        .arg(
            Arg::new("temp")
                .long("temp")
                .help("Temperature stored with the reading")
                .value_name("N")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .default_value("26"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Number of documents to print")
                .value_name("N")
                .value_parser(value_parser!(i64).range(1..=MAX_LIMIT))
                .default_value("10"),
        )
}

/// Combines parsed arguments with the resolved configuration.
pub fn settings_from(matches: &ArgMatches, config: Config) -> Settings {
    let config = config.with_overrides(
        matches.get_one::<String>("uri").cloned(),
        matches.get_one::<String>("username").cloned(),
        matches.get_one::<String>("password").cloned(),
    );

    Settings {
        config,
        device: matches
            .get_one::<String>("device")
            .cloned()
            .unwrap_or_else(|| SAMPLE_DEVICE.to_string()),
        temp: matches.get_one::<i32>("temp").copied().unwrap_or(SAMPLE_TEMP),
        limit: matches.get_one::<i64>("limit").copied().unwrap_or(MAX_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_URI, DEFAULT_USERNAME};

    fn defaults() -> Config {
        Config::from_lookup(|_| None)
    }

    #[test]
    fn no_arguments_gives_literal_run() {
        let matches = cli().try_get_matches_from(["cosmos-readings"]).unwrap();
        let settings = settings_from(&matches, defaults());

        assert_eq!(settings.config.uri, DEFAULT_URI);
        assert_eq!(settings.config.username, DEFAULT_USERNAME);
        assert_eq!(settings.device, "sensor-001");
        assert_eq!(settings.temp, 26);
        assert_eq!(settings.limit, 10);
    }

    #[test]
    fn flags_override_configuration() {
        let matches = cli()
            .try_get_matches_from([
                "cosmos-readings",
                "--uri",
                "mongodb://localhost:27017",
                "--username",
                "tester",
                "--device",
                "probe-7",
                "--temp",
                "-3",
                "--limit",
                "3",
            ])
            .unwrap();
        let settings = settings_from(&matches, defaults());

        assert_eq!(settings.config.uri, "mongodb://localhost:27017");
        assert_eq!(settings.config.username, "tester");
        assert_eq!(settings.device, "probe-7");
        assert_eq!(settings.temp, -3);
        assert_eq!(settings.limit, 3);
    }

    #[test]
    fn limit_cannot_exceed_ten() {
        assert!(cli().try_get_matches_from(["cosmos-readings", "--limit", "11"]).is_err());
        assert!(cli().try_get_matches_from(["cosmos-readings", "--limit", "0"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        cli().debug_assert();
    }
}
