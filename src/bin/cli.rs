use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mimekind::config::{load_config, Config};
use mimekind::{Category, ContentError, ContentTypeResolver, Header};
use std::process;

fn cli() -> Command {
    Command::new("mimekind")
        .about("Resolve Content-Type values into content categories and charsets")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("JSON config file")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("charset")
                .long("charset")
                .global(true)
                .help("Charset reported when a header declares none")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("map")
                .short('m')
                .long("map")
                .global(true)
                .value_name("MIME=CATEGORY")
                .help("Extra handler mapping, may be repeated")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String)),
        )
        .subcommand(
            Command::new("resolve")
                .about("Print the category of a MIME type")
                .arg(
                    Arg::new("mime")
                        .required(true)
                        .value_parser(value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("header")
                .about("Print category and charset of a Content-Type header value")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .value_parser(value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List the MIME strings mapped to a category")
                .arg(
                    Arg::new("category")
                        .required(true)
                        .value_parser(value_parser!(String)),
                ),
        )
}

/// Config file and environment first, then command line flags on top.
fn build_resolver(matches: &ArgMatches) -> Result<ContentTypeResolver, ContentError> {
    let mut config = load_config(matches.get_one::<String>("config").map(String::as_str))?;

    let mut overrides = Config::builder();
    if let Some(raw) = config.content_handlers_map() {
        overrides = overrides.handlers_map(raw);
    }
    if let Some(entries) = matches.get_many::<String>("map") {
        for entry in entries {
            let (mime, category) =
                entry
                    .split_once('=')
                    .ok_or_else(|| ContentError::ConfigInvalid {
                        field: "map".to_string(),
                        reason: format!("expected MIME=CATEGORY, got '{}'", entry),
                    })?;
            overrides = overrides.handler(mime.trim(), category.trim());
        }
    }
    if let Some(charset) = matches.get_one::<String>("charset") {
        overrides = overrides.default_charset(charset);
    }
    config.merge(overrides.build());

    let resolver = ContentTypeResolver::new();
    resolver.configure(&config)?;
    Ok(resolver)
}

fn run(matches: &ArgMatches) -> Result<(), ContentError> {
    match matches.subcommand() {
        Some(("resolve", resolve_matches)) => {
            let resolver = build_resolver(resolve_matches)?;
            let mime = resolve_matches
                .get_one::<String>("mime")
                .expect("mime is required");
            println!("{}", resolver.resolve(mime)?);
        }
        Some(("header", header_matches)) => {
            let resolver = build_resolver(header_matches)?;
            let value = header_matches
                .get_one::<String>("value")
                .expect("value is required");
            let headers = vec![Header::content_type(value.as_str())];
            println!("category: {}", resolver.resolve_from_headers(&headers));
            println!("charset: {}", resolver.parse_charset(&headers));
        }
        Some(("list", list_matches)) => {
            let resolver = build_resolver(list_matches)?;
            let name = list_matches
                .get_one::<String>("category")
                .expect("category is required");
            let mut mimes = resolver.list_mime_strings(Category::from_name(name)?);
            mimes.sort();
            for mime in mimes {
                println!("{}", mime);
            }
        }
        _ => unreachable!("subcommand_required prevents this"),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
