use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "valentine",
    version,
    about = "generate a standalone \"will you be my valentine\" page",
    long_about = "Valentine turns a handful of texts and image URLs into a single self-contained HTML page with a runaway (or ever-shrinking) \"No\" button.\n\nExamples:\n  valentine --title \"Will you be my valentine?\" --yes-button-text Yes --phrase \"Are you sure?\"\n  valentine --config ~/.valentine/config.yml -o valentine.html\n  valentine --config page.yml --preview\n  valentine --init-config\n\nTip: Use --config to keep your texts in a file and --preview to iterate on them in a browser."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv, -vvv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Log format on stderr (human or json)."
    )]
    pub log_format: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.valentine/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write a starter config to --config (or the default path) and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 't',
        long = "title",
        value_name = "TEXT",
        help_heading = "Page",
        help = "Heading shown above the first image (also the document title)."
    )]
    pub title: Option<String>,

    #[arg(
        short = 's',
        long = "subtitle",
        value_name = "TEXT",
        help_heading = "Page",
        help = "Line shown under the heading."
    )]
    pub subtitle: Option<String>,

    #[arg(
        long = "first-image",
        visible_alias = "fi",
        value_name = "URL",
        help_heading = "Page",
        help = "Image shown on the question screen."
    )]
    pub first_image: Option<String>,

    #[arg(
        long = "second-image",
        visible_alias = "si",
        value_name = "URL",
        help_heading = "Page",
        help = "Image shown on the success screen."
    )]
    pub second_image: Option<String>,

    #[arg(
        short = 'b',
        long = "background-image",
        visible_alias = "bg",
        value_name = "URL",
        help_heading = "Page",
        help = "Background image for both screens (default: pink gradient)."
    )]
    pub background_image: Option<String>,

    #[arg(
        short = 'y',
        long = "yes-button-text",
        visible_alias = "yes",
        value_name = "TEXT",
        help_heading = "Buttons",
        help = "Label of the affirmative button."
    )]
    pub yes_button_text: Option<String>,

    #[arg(
        long = "yes-click-text",
        value_name = "TEXT",
        help_heading = "Buttons",
        help = "Message shown on the success screen."
    )]
    pub yes_click_text: Option<String>,

    #[arg(
        long = "no-button-text",
        visible_alias = "no",
        value_name = "TEXT",
        help_heading = "Buttons",
        help = "Initial label of the negative button (default: No)."
    )]
    pub no_button_text: Option<String>,

    #[arg(
        short = 'p',
        long = "phrase",
        value_name = "TEXT",
        action = ArgAction::Append,
        help_heading = "Buttons",
        help = "Phrase cycled by the negative button (repeatable)."
    )]
    pub phrase: Vec<String>,

    #[arg(
        short = 'P',
        long = "phrases-file",
        value_name = "FILE",
        help_heading = "Buttons",
        help = "Load negative button phrases from a file (one per line)."
    )]
    pub phrases_file: Option<String>,

    #[arg(
        short = 'a',
        long = "animation",
        value_name = "MODE",
        help_heading = "Buttons",
        help = "What a click on the negative button does (grow or random)."
    )]
    pub animation: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help_heading = "Delivery",
        help = "Write the page to a file (default: valentine.html)."
    )]
    pub output: Option<String>,

    #[arg(
        long = "stdout",
        help_heading = "Delivery",
        help = "Print the page to stdout instead of writing a file."
    )]
    pub stdout: bool,

    #[arg(
        long = "preview",
        value_name = "ADDR",
        num_args = 0..=1,
        default_missing_value = crate::preview::DEFAULT_PREVIEW_ADDR,
        help_heading = "Delivery",
        help = "Serve a live preview (default 127.0.0.1:8080) instead of writing a file."
    )]
    pub preview: Option<String>,
}
