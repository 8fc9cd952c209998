use std::process::ExitCode;

use clap::builder::BoolishValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use confchart::config::{
    ChartOptions, DEFAULT_IMAGE_MAP_FILENAME, DEFAULT_MAP_NAME, DateStyle, InputSource, OutputTarget, RunConfig,
};
use confchart::error::ChartError;
use confchart::output;

const AFTER_HELP: &str = "\
Input example:
  #! confdata 2
  # COMMAND Conf name  conf time              deadline    notification
  CONFITEM  EGSR2010   2010/06/28-2010/06/30  2010/04/09  2010/05/14
  CONFITEM  HPG2010    2010/06/25-2010/06/27  2010/04/09  2010/05/08
  CONFITEM  SIGGASIA   2010/12/15-2010/12/18  2010/05/11  <unknown>
  # COMMAND date       label
  DATELINE  2010/05/11 11th_May";

#[derive(Parser, Debug)]
#[command(
    name = "confchart",
    version,
    about = "Draw a conference schedule chart (fly script + HTML image map) from confdata",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Input confdata file, or - for stdin
    #[arg(short = 'i', long = "infile", env = "CONFCHART_INFILE", default_value = "-")]
    infile: String,

    /// Output fly script, or - for stdout
    #[arg(short = 'o', long = "outfile", env = "CONFCHART_OUTFILE", default_value = "-")]
    outfile: String,

    /// Image map output file, or - for stdout
    #[arg(short = 'I', long = "image-map-file", env = "CONFCHART_IMAGE_MAP_FILE", default_value = DEFAULT_IMAGE_MAP_FILENAME)]
    image_map_file: String,

    /// Value of the `<map name="...">` attribute
    #[arg(long, env = "CONFCHART_MAP_NAME", default_value = DEFAULT_MAP_NAME)]
    map_name: String,

    /// Deadline date text (0 off, 1 on)
    #[arg(short = 'd', long = "textdeadline", env = "CONFCHART_TEXT_DEADLINE", value_name = "0|1",
          default_value = "1", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    text_deadline: bool,

    /// Conference date text (0 off, 1 on)
    #[arg(short = 'c', long = "textconference", env = "CONFCHART_TEXT_CONFERENCE", value_name = "0|1",
          default_value = "1", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    text_conference: bool,

    /// Notification date text (0 off, 1 on); off also shrinks rows
    #[arg(short = 'n', long = "textnotification", env = "CONFCHART_TEXT_NOTIFICATION", value_name = "0|1",
          default_value = "1", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    text_notification: bool,

    /// Month name date format, e.g. Jan/01 (0 off, 1 on)
    #[arg(short = 'm', long = "month-name", env = "CONFCHART_MONTH_NAME", value_name = "0|1",
          default_value = "0", action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    month_name: bool,

    /// Verbose diagnostics on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            input: InputSource::from_arg(&self.infile),
            chart: OutputTarget::from_arg(&self.outfile),
            image_map: OutputTarget::from_arg(&self.image_map_file),
            map_name: self.map_name,
            options: ChartOptions {
                text_deadline: self.text_deadline,
                text_conference: self.text_conference,
                text_notification: self.text_notification,
                date_style: if self.month_name { DateStyle::MonthName } else { DateStyle::Numeric },
            },
            verbose: self.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            eprint!("{}", err.render());
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };
    let config = cli.into_config();
    init_tracing(config.verbose);
    tracing::debug!(?config, "resolved configuration");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn run(config: &RunConfig) -> Result<(), ChartError> {
    let input = output::read_input(&config.input)?;
    let artifacts = confchart::generate(&input, &config.options, &config.map_name)?;
    tracing::info!(
        input = %config.input,
        entries = artifacts.entry_count,
        width = artifacts.layout.image_width,
        height = artifacts.layout.image_height,
        "rendered chart"
    );

    output::commit_all(&[
        (&config.chart, artifacts.chart.as_str()),
        (&config.image_map, artifacts.image_map.as_str()),
    ])?;
    tracing::debug!(chart = %config.chart, image_map = %config.image_map, "committed artifacts");
    Ok(())
}
