use std::net::SocketAddr;

use crate::cli::args::CliArgs;
use crate::logging::LogFormat;
use crate::page::ButtonAnimation;

pub fn parse_animation(raw: &str) -> Result<ButtonAnimation, String> {
    ButtonAnimation::parse(raw)
        .ok_or_else(|| format!("invalid --animation '{raw}', expected grow or random"))
}

pub fn parse_log_format(raw: &str) -> Result<LogFormat, String> {
    LogFormat::parse(raw).ok_or_else(|| format!("invalid --log-format '{raw}', expected human or json"))
}

pub fn parse_preview_addr(raw: &str) -> Result<SocketAddr, String> {
    raw.trim()
        .parse::<SocketAddr>()
        .map_err(|e| format!("invalid --preview address '{raw}': {e}"))
}

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.animation.as_deref() {
        parse_animation(raw)?;
    }
    if let Some(raw) = args.log_format.as_deref() {
        parse_log_format(raw)?;
    }
    if let Some(raw) = args.preview.as_deref() {
        parse_preview_addr(raw)?;
        if args.stdout {
            return Err("use either --stdout or --preview, not both".to_string());
        }
        if args.output.is_some() {
            return Err("use either --output or --preview, not both".to_string());
        }
    }
    if args.stdout && args.output.is_some() {
        return Err("use either --stdout or --output, not both".to_string());
    }
    if !args.phrase.is_empty() && args.phrases_file.is_some() {
        return Err("use either --phrase or --phrases-file, not both".to_string());
    }
    Ok(())
}
