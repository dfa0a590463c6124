//! Command line parsing, plus the usage text shown whenever we give up before
//! posting anything.
//!
//! ```text
//! slackem [-color=<name>] <channel> <word> [<word> ...]
//! ```

use crate::{
    config::{Config, ICON_EMOJI_VAR, USERNAME_VAR, WEBHOOK_URL_VAR},
    slack::channel::ChannelName,
};
use clap::Parser;
use std::{ffi::OsString, io, path::Path};
use thiserror::Error;
use tracing::info;

/// Post a message to a Slack channel via an incoming webhook.
#[derive(Parser, Debug)]
#[command(name = "slackem", version, after_help = config_help())]
pub struct Args {
    /// The color on the left of the message: grey, red, green, or blue.
    #[arg(long, default_value = "grey")]
    pub color: String,

    /// The channel, without its leading #, followed by your message.
    #[arg(value_name = "CHANNEL MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<OsString>,
}

/// Everything needed to post, once the command line has been validated.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub channel: ChannelName,
    pub message: String,
    pub color: String,
}

/// Reasons to stop before posting anything. All of these exit with status 1.
#[derive(Debug, Error)]
pub enum Fatal {
    #[error("you must provide an incoming webhook url")]
    MissingWebhookUrl,

    #[error("not enough args")]
    NotEnoughArgs,

    #[error("{}", first_line(.0))]
    Args(#[from] clap::Error),
}

/// Whether clap wants to print help or version info rather than fail.
pub fn is_informational(e: &clap::Error) -> bool {
    matches!(
        e.kind(),
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
    )
}

fn first_line(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").to_owned()
}

/// Parse and validate the full argument vector, program name included.
/// Arguments needn't be valid UTF-8; invalid sequences in the channel or
/// message become U+FFFD.
///
/// The webhook URL is checked before the arguments, so a missing URL is
/// reported even when the arguments are also wrong.
pub fn prepare(argv: &[OsString], config: &Config) -> Result<Invocation, Fatal> {
    let args = Args::try_parse_from(normalize_flags(argv))?;

    if config.webhook_url.is_empty() {
        return Err(Fatal::MissingWebhookUrl);
    }

    info!("{:?}", argv);
    info!("{}", args.color);

    args.into_invocation()
}

impl Args {
    /// Split the positional words into a channel and message. Anything that
    /// looks like a flag is dropped rather than rejected.
    fn into_invocation(self) -> Result<Invocation, Fatal> {
        let mut words = self
            .words
            .iter()
            .map(|w| w.to_string_lossy())
            .filter(|w| !w.starts_with('-'));

        let channel = words.next().ok_or(Fatal::NotEnoughArgs)?;
        let message: Vec<_> = words.collect();
        if message.is_empty() {
            return Err(Fatal::NotEnoughArgs);
        }

        Ok(Invocation {
            channel: ChannelName::from_arg(&channel),
            message: message.join(" "),
            color: self.color,
        })
    }
}

/// Rewrite the single-dash `-color` spelling into the `--color` clap expects.
fn normalize_flags(argv: &[OsString]) -> Vec<OsString> {
    argv.iter()
        .enumerate()
        .map(|(i, arg)| match arg.to_str() {
            Some(flag) if i > 0 && (flag == "-color" || flag.starts_with("-color=")) => {
                OsString::from(format!("-{}", flag))
            }
            _ => arg.clone(),
        })
        .collect()
}

/// The name we were invoked as, without any leading directories.
pub fn program_name(argv: &[OsString]) -> String {
    argv.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "slackem".to_owned())
}

fn config_help() -> String {
    format!(
        "configuration: all through environment vars.\n\n    \
         {WEBHOOK_URL_VAR} - your incoming webhook url, required\n    \
         {USERNAME_VAR}    - the username for who sent the message, defaults to slackem\n    \
         {ICON_EMOJI_VAR}  - the emoji icon to use, defaults to :rocket:\n"
    )
}

pub fn usage(program: &str, w: &mut impl io::Write) -> io::Result<()> {
    writeln!(w, "usage: {} [-color=grey|red|green|blue] channel Type your message...", program)?;
    write!(w, "{}", config_help())
}

/// Explain why we're giving up, followed by the usage text.
pub fn report_fatal(program: &str, fatal: &Fatal, w: &mut impl io::Write) -> io::Result<()> {
    writeln!(w, "fatal: {}", fatal)?;
    usage(program, w)
}
