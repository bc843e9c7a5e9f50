use anyhow::{Context, Result};
use catalog_tui::{app::App, catalog::Catalog, config::Config, filter::Location, state::State};
use clap::{App as Cli, Arg, ArgMatches};
use std::path::Path;

fn cli<'a, 'b>() -> Cli<'a, 'b> {
    Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("catalog")
                .long("catalog")
                .value_name("FILE")
                .help("Load projects from a YAML or JSON catalog file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("location")
                .short("l")
                .long("location")
                .value_name("URL")
                .help("Start at the given location, e.g. /projects?themes=build")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("list")
                .long("list")
                .help("Print the projects matching the location and exit"),
        )
        .arg(
            Arg::with_name("print-location")
                .long("print-location")
                .help("Print the final location on exit"),
        )
}

/// Resolve the catalog from the command line, then the configuration, then
/// the built-in one.
///
fn load_catalog(matches: &ArgMatches, config: &Config) -> Result<Catalog> {
    let path = matches
        .value_of("catalog")
        .map(Path::new)
        .or(config.catalog_path.as_deref());
    let catalog = match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Failed to parse built-in catalog")?,
    };
    Ok(catalog)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let catalog = load_catalog(&matches, &config)?;
    let location = matches
        .value_of("location")
        .map(Location::parse)
        .unwrap_or_default();

    if matches.is_present("list") {
        let mut state = State::new(catalog, config.search_debounce(), location, Default::default());
        state.mount();
        for project in state.filtered_projects() {
            println!("{}\t{}", project.id, project.name);
        }
        return Ok(());
    }

    let final_location = App::start(config, catalog, location)?;
    if matches.is_present("print-location") {
        println!("{}", final_location);
    }
    Ok(())
}
