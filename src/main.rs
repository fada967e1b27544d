// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use yoombaa_core::app::{paths, AppContext};
use yoombaa_core::i18n::LanguageCode;

const HELP: &str = "\
yoombaa-prefs - inspect and change Yoombaa language preferences

USAGE:
  yoombaa-prefs [OPTIONS] <COMMAND>

COMMANDS:
  languages           List selectable languages
  get                 Print the persisted language
  set <code>          Change and persist the language
  tr <key>... [n=v]   Translate keys, with optional Fluent arguments
  palette             Print the color palette

OPTIONS:
  --config-dir <dir>  Override the config directory
  --lang <code>       Translate with this language without persisting it
  -h, --help          Print help
";

struct Args {
    config_dir: Option<String>,
    lang: Option<LanguageCode>,
    command: Option<String>,
    rest: Vec<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(Args {
            config_dir: None,
            lang: None,
            command: None,
            rest: Vec::new(),
        });
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let lang = args.opt_value_from_str("--lang")?;
    let mut free = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok());

    Ok(Args {
        config_dir,
        lang,
        command: free.next(),
        rest: free.collect(),
    })
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };
    let Some(command) = args.command.as_deref() else {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    };

    paths::init_cli_override(args.config_dir);
    let context = AppContext::from_config_dir(None).await;
    for toast in context.toasts().toasts() {
        eprintln!("{}: {}", toast.severity(), toast.text());
    }

    match command {
        "languages" => {
            let active = context.localization().active_language();
            for language in context.localization().languages() {
                let marker = if language.code == active { "*" } else { " " };
                println!(
                    "{marker} {} {:<3} {:<12} {}",
                    language.flag, language.code, language.name, language.native_name
                );
            }
            ExitCode::SUCCESS
        }
        "get" => {
            println!("{}", context.localization().active_language());
            ExitCode::SUCCESS
        }
        "set" => {
            let Some(code) = args.rest.first() else {
                eprintln!("error: `set` needs a language code\n\n{HELP}");
                return ExitCode::from(2);
            };
            let (changed, id) = context.change_language(code).await;
            if let Some(toast) = context.toasts().toasts().iter().find(|t| t.id() == id) {
                println!("{}", toast.text());
            }
            if changed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        "tr" => {
            let (fluent_args, keys): (Vec<&String>, Vec<&String>) =
                args.rest.iter().partition(|item| item.contains('='));
            if keys.is_empty() {
                eprintln!("error: `tr` needs at least one key\n\n{HELP}");
                return ExitCode::from(2);
            }
            let fluent_args: Vec<(&str, &str)> = fluent_args
                .into_iter()
                .filter_map(|item| item.split_once('='))
                .collect();
            let language = args
                .lang
                .unwrap_or_else(|| context.localization().active_language());
            let dictionaries = context.localization().dictionaries();
            for key in keys {
                println!("{key} = {}", dictionaries.tr_with_args(language, key, &fluent_args));
            }
            ExitCode::SUCCESS
        }
        "palette" => {
            for (role, color) in context.theme().colors().roles() {
                println!("{role:<16} {color}");
            }
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("error: unknown command `{other}`\n\n{HELP}");
            ExitCode::from(2)
        }
    }
}
