use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use cpe::Cpe;

#[derive(Copy, Clone, PartialEq, Eq)]
enum CpeOutputFormat {
    Json,
    JsonLines,
    Text,
}

fn main() -> Result<()> {
    let matches = Command::new("cpe_dump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parses CPE names (URI or formatted binding) into structured records")
        .arg(
            Arg::new("CPE")
                .num_args(0..)
                .help("CPE names to parse; reads newline-delimited names from stdin when omitted"),
        )
        .arg(
            Arg::new("output-format")
                .short('o')
                .long("output-format")
                .value_parser(["json", "jsonl", "text"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Log verbosity ( -v info, -vv debug, -vvv trace )"),
        )
        .get_matches();

    let output_format = match matches
        .get_one::<String>("output-format")
        .expect("has default")
        .as_str()
    {
        "json" => CpeOutputFormat::Json,
        "jsonl" => CpeOutputFormat::JsonLines,
        _ => CpeOutputFormat::Text,
    };

    let verbosity_level = match matches.get_count("verbose") {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        3 => Some(LevelFilter::Trace),
        _ => {
            eprintln!("using more than -vvv does not affect verbosity level");
            Some(LevelFilter::Trace)
        }
    };

    if let Some(level) = verbosity_level {
        TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .context("failed to initialize the logger")?;
    }

    let args: Vec<String> = matches
        .get_many::<String>("CPE")
        .map(|names| names.cloned().collect())
        .unwrap_or_default();

    // `cpe_dump -` reads from stdin as well, for pipeline friendliness.
    let inputs: Vec<String> = if args.is_empty() || args == ["-"] {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("failed to read CPE names from stdin")?
    } else {
        args
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    for input in &inputs {
        let record = cpe::parse(input);
        dump_record(&mut output, input, &record, output_format)?;
    }

    Ok(())
}

fn dump_record(
    output: &mut impl Write,
    input: &str,
    record: &Cpe,
    format: CpeOutputFormat,
) -> Result<()> {
    match format {
        CpeOutputFormat::Json => writeln!(output, "{}", serde_json::to_string_pretty(record)?)?,
        CpeOutputFormat::JsonLines => writeln!(output, "{}", serde_json::to_string(record)?)?,
        CpeOutputFormat::Text => {
            writeln!(output, "{input}")?;
            writeln!(output, "  part:       {}", record.part)?;
            writeln!(output, "  vendor:     {}", record.vendor)?;
            writeln!(output, "  product:    {}", record.product)?;
            writeln!(output, "  version:    {}", record.version)?;
            writeln!(output, "  update:     {}", record.update)?;
            writeln!(output, "  edition:    {}", record.edition)?;
            writeln!(output, "  language:   {}", record.language)?;
            writeln!(output, "  sw_edition: {}", record.sw_edition)?;
            writeln!(output, "  target_sw:  {}", record.target_sw)?;
            writeln!(output, "  target_hw:  {}", record.target_hw)?;
            writeln!(output, "  other:      {}", record.other)?;
        }
    }

    Ok(())
}
