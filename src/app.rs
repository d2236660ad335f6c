use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use tracing::{debug, info, warn};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::logging::{self, LogFormat};
use crate::output::{self, OutputTarget};
use crate::page::{parse_phrases, PageConfig, DEFAULT_NO_BUTTON_TEXT};
use crate::preview::{self, RenderFn};
use crate::template;

fn print_banner() {
    let banner = format!(
        r#"
   _  _     __   __    _             _   _
  ( \/ )    \ \ / /_ _| |___ _ _| |_(_)_ _  ___
   \  /      \ V / _` | / -_) ' \  _| | ' \/ -_)
    \/        \_/\__,_|_\___|_||_\__|_|_||_\___|
          v{} - will you be my valentine?
"#,
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("{}", banner.bright_red());
}

fn format_kv_line(label: &str, value: &str) -> String {
    format!("{} {:<10}: {}", "::".bright_magenta(), label, value)
}

fn format_opt_value(v: &str) -> &str {
    if v.trim().is_empty() {
        "(blank)"
    } else {
        v
    }
}

#[derive(Debug)]
struct RunConfig {
    page: PageConfig,
    target: OutputTarget,
    preview: Option<SocketAddr>,
}

/// Where the config file comes from. An explicit `--config` must exist; the
/// default location is optional.
#[derive(Clone, Debug)]
struct ConfigSource {
    path: Option<PathBuf>,
    allow_missing: bool,
}

impl ConfigSource {
    fn from_args(args: &CliArgs) -> Self {
        match args.config.as_deref() {
            Some(p) => Self {
                path: Some(config::expand_tilde(p)),
                allow_missing: false,
            },
            None => Self {
                path: config::default_config_path(),
                allow_missing: true,
            },
        }
    }

    fn load(&self) -> Result<ConfigFile, String> {
        match self.path.as_ref() {
            Some(path) => {
                let cfg = config::load_config(path, self.allow_missing).map_err(|e| e.to_string())?;
                debug!(path = %path.display(), "config loaded");
                Ok(cfg)
            }
            None => Ok(ConfigFile::default()),
        }
    }
}

fn read_phrases_file(path: &Path) -> Result<Vec<String>, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read phrases file {}: {e}", path.display()))?;
    Ok(parse_phrases(&raw))
}

/// Merge CLI values over config values over defaults.
fn build_page(args: &CliArgs, cfg: ConfigFile) -> Result<PageConfig, String> {
    let button_animation = match args.animation.as_deref() {
        Some(raw) => validation::parse_animation(raw)?,
        None => cfg.button_animation.unwrap_or_default(),
    };

    let no_button_phrases = if !args.phrase.is_empty() {
        args.phrase
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    } else if let Some(path) = args.phrases_file.as_deref() {
        read_phrases_file(&config::expand_tilde(path))?
    } else {
        parse_phrases(cfg.no_button_phrases.as_deref().unwrap_or_default())
    };

    let page = PageConfig {
        title: args.title.clone().or(cfg.title).unwrap_or_default(),
        subtitle: args.subtitle.clone().or(cfg.subtitle).unwrap_or_default(),
        first_image: args.first_image.clone().or(cfg.first_image).unwrap_or_default(),
        second_image: args.second_image.clone().or(cfg.second_image).unwrap_or_default(),
        yes_click_text: args
            .yes_click_text
            .clone()
            .or(cfg.yes_click_text)
            .unwrap_or_default(),
        yes_button_text: args
            .yes_button_text
            .clone()
            .or(cfg.yes_button_text)
            .unwrap_or_default(),
        no_button_text: args
            .no_button_text
            .clone()
            .or(cfg.no_button_text)
            .unwrap_or_else(|| DEFAULT_NO_BUTTON_TEXT.to_string()),
        no_button_phrases,
        background_image: args.background_image.clone().or(cfg.background_image),
        button_animation,
    };

    Ok(page)
}

fn build_run_config(args: &CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(args)?;

    let preview = args
        .preview
        .as_deref()
        .map(validation::parse_preview_addr)
        .transpose()?;

    let target = if args.stdout {
        OutputTarget::Stdout
    } else {
        args.output
            .clone()
            .or_else(|| cfg.output.clone())
            .map(|p| OutputTarget::File(config::expand_tilde(&p)))
            .unwrap_or_default()
    };

    let page = build_page(args, cfg)?;

    Ok(RunConfig {
        page,
        target,
        preview,
    })
}

fn warn_on_blank(page: &PageConfig) {
    let blank = page.blank_fields();
    if !blank.is_empty() {
        warn!(fields = ?blank, "some fields are blank and will render empty");
    }
    if page.no_button_phrases.is_empty() {
        warn!("no phrases configured, the negative button keeps its label");
    }
}

fn print_summary(page: &PageConfig, target: &OutputTarget, bytes: usize) {
    let lines = [
        format_kv_line("Title", format_opt_value(&page.title)),
        format_kv_line("Yes", format_opt_value(&page.yes_button_text)),
        format_kv_line("No", format_opt_value(&page.no_button_text)),
        format_kv_line("Phrases", &page.no_button_phrases.len().to_string()),
        format_kv_line("Animation", page.button_animation.as_str()),
        format_kv_line(
            "Background",
            page.background().unwrap_or("default gradient"),
        ),
        format_kv_line("Output", &target.describe()),
        format_kv_line("Size", &format!("{bytes} bytes")),
    ];
    for line in lines {
        eprintln!("{line}");
    }
}

fn run_preview(addr: SocketAddr, args: CliArgs, source: ConfigSource) -> Result<(), String> {
    let render: RenderFn = Arc::new(move || -> Result<String, String> {
        let cfg = source.load()?;
        let page = build_page(&args, cfg)?;
        Ok(template::render_html(&page))
    });

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(preview::serve(addr, render))
        .map_err(|e| e.to_string())
}

fn init_config(args: &CliArgs) -> Result<(), String> {
    let path = match args.config.as_deref() {
        Some(p) => config::expand_tilde(p),
        None => config::default_config_path()
            .ok_or_else(|| "could not determine home directory, pass --config".to_string())?,
    };
    let created = config::ensure_default_config_file(&path).map_err(|e| e.to_string())?;
    if created {
        info!(path = %path.display(), "starter config written");
        eprintln!("{}", format_kv_line("Config", &format!("written to {}", path.display())));
    } else {
        eprintln!("{}", format_kv_line("Config", &format!("{} already exists", path.display())));
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let log_format = match args.log_format.as_deref() {
        Some(raw) => validation::parse_log_format(raw)?,
        None => LogFormat::default(),
    };

    let source = ConfigSource::from_args(&args);
    let cfg = if args.init_config {
        ConfigFile::default()
    } else {
        source.load()?
    };

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };
    if no_color {
        colored::control::set_override(false);
    } else if args.color {
        colored::control::set_override(true);
    }
    logging::init_logging(log_format, args.verbose, no_color);

    if args.init_config {
        return init_config(&args);
    }

    let run = build_run_config(&args, cfg)?;
    warn_on_blank(&run.page);

    if let Some(addr) = run.preview {
        print_banner();
        return run_preview(addr, args, source);
    }

    if run.target != OutputTarget::Stdout {
        print_banner();
    }

    let html = template::render_html(&run.page);
    debug!(
        phrases = run.page.no_button_phrases.len(),
        animation = run.page.button_animation.as_str(),
        bytes = html.len(),
        "page rendered"
    );

    let bytes = output::write_artifact(&html, &run.target).map_err(|e| e.to_string())?;
    info!(output = %run.target.describe(), bytes, "page written");

    print_summary(&run.page, &run.target, bytes);
    Ok(())
}
