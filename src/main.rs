// SPDX-License-Identifier: MPL-2.0
use mod_localizer::config::{self, PackageConfig};
use mod_localizer::fonts::{FontManifest, FontPolicy};
use mod_localizer::i18n::resolve_requested_language;
use mod_localizer::{Error, FontType, Language, LocalizationSession, Subgroup};
use std::path::PathBuf;
use tracing::info;

const HELP: &str = "\
mod-localizer

USAGE:
  mod-localizer --config <package.toml> [OPTIONS] [<Subgroup> <key>]...

OPTIONS:
  --config <FILE>        Package manifest
  --lang <Language>      Language to request (default: settings, then OS locale)
  --languages            List the languages the package ships
  --fonts <FILE>         Font manifest
  --font-type <TYPE>     Font type to load from the font manifest
  --primary-only         Keep only baseline-language font variants
  -h, --help             Print this help
";

struct Args {
    config: PathBuf,
    lang: Option<Language>,
    list_languages: bool,
    fonts: Option<PathBuf>,
    font_type: Option<FontType>,
    primary_only: bool,
    lookups: Vec<(Subgroup, String)>,
}

fn parse_args() -> Result<Option<Args>, Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }

    let cli_error = |err: pico_args::Error| Error::Config(err.to_string());
    let config = args.value_from_str("--config").map_err(cli_error)?;
    let lang = args
        .opt_value_from_str::<_, String>("--lang")
        .map_err(cli_error)?
        .map(|name| parse_language(&name))
        .transpose()?;
    let list_languages = args.contains("--languages");
    let fonts = args.opt_value_from_str("--fonts").map_err(cli_error)?;
    let font_type = args.opt_value_from_str("--font-type").map_err(cli_error)?;
    let primary_only = args.contains("--primary-only");

    let free: Vec<String> = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let lookups = parse_lookups(&free)?;

    Ok(Some(Args {
        config,
        lang,
        list_languages,
        fonts,
        font_type,
        primary_only,
        lookups,
    }))
}

fn parse_language(name: &str) -> Result<Language, Error> {
    name.parse::<Language>()
        .map_err(|err| Error::InvalidLanguage(err.value))
}

fn parse_lookups(free: &[String]) -> Result<Vec<(Subgroup, String)>, Error> {
    if free.len() % 2 != 0 {
        return Err(Error::Config(
            "lookups must be given as <Subgroup> <key> pairs".to_string(),
        ));
    }
    free.chunks(2)
        .map(|pair| {
            let subgroup = pair[0]
                .parse::<Subgroup>()
                .map_err(|err| Error::UnknownSubgroup { label: err.value })?;
            Ok((subgroup, pair[1].clone()))
        })
        .collect()
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "mod_localizer=info"
                    .parse()
                    .map_err(|err| Error::Config(format!("log filter: {err}")))?,
            ),
        )
        .init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let package = PackageConfig::load_from_path(&args.config)?;
    let settings = config::load()?;
    let requested = resolve_requested_language(args.lang, &settings, package.default_language);
    info!("Requesting {} for {}", requested, package.name);

    let mut session = LocalizationSession::from_config(&package)?;
    session.initialize(requested)?;

    if args.list_languages {
        for language in session.available_languages().iter() {
            println!("{}", language);
        }
    }

    for (subgroup, key) in &args.lookups {
        println!("{}/{} = {}", subgroup, key, session.get_text(*subgroup, key));
    }

    match (args.fonts, args.font_type) {
        (Some(path), Some(font_type)) => {
            let manifest = FontManifest::load_from_path(&path)?;
            let policy = if args.primary_only {
                FontPolicy::PrimaryOnly
            } else {
                FontPolicy::AvailabilityFiltered
            };
            let set = session.load_filtered_font_set(&manifest, font_type, policy)?;
            for variant in set.variants() {
                println!("{} {} {}", font_type, variant.language, variant.asset.display());
            }
        }
        (None, None) => {}
        _ => {
            return Err(Error::Config(
                "--fonts and --font-type must be given together".to_string(),
            ))
        }
    }

    Ok(())
}
