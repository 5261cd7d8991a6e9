use anyhow::Result;
use clap::{App as Cli, Arg};
use intake::app::{App, Options};
use intake::config::Config;
use intake::form::FormKind;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("form")
                .value_name("FORM")
                .help("Form to open")
                .possible_values(&["case", "lead"])
                .case_insensitive(true)
                .default_value("case"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("clear-draft")
                .long("clear-draft")
                .help("Discards saved form data before opening the form"),
        )
        .get_matches();

    let form: FormKind = matches
        .value_of("form")
        .unwrap_or("case")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(
        config,
        Options {
            form,
            clear_draft: matches.is_present("clear-draft"),
        },
    )
    .await
}
