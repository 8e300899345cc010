//! # x12-cli
//!
//! Command-line interface for the X12 transaction-set codec: decode wire
//! documents to JSON, encode JSON documents back to wire form, and inspect
//! the declared catalog.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::sync::Arc;
use x12_codec::{DecodeMode, DecodeOptions, Delimiters, X12Codec};
use x12_ir::{Document, DocumentKey, Version};
use x12_schema::{
    DescriptorRegistry, LoopDescriptor, MemberDescriptor, MemberKind, Requirement,
    TransactionSetDescriptor,
};

#[derive(Parser)]
#[command(name = "x12")]
#[command(about = "X12 transaction-set codec CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Decode an X12 wire file into a JSON document
    Decode {
        /// Input file path
        input: String,

        /// Transaction-set identifier, e.g. 204
        #[arg(short, long)]
        set: String,

        /// Release version, e.g. 4010
        #[arg(short = 'r', long)]
        version: u16,

        /// Collect element syntax violations as warnings instead of failing
        #[arg(long)]
        lenient: bool,

        /// Segment terminator character
        #[arg(long, default_value = "~")]
        segment_terminator: char,

        /// Element separator character
        #[arg(long, default_value = "*")]
        element_separator: char,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Encode a JSON document back into X12 wire form
    Encode {
        /// Input JSON file path
        input: String,

        /// Segment terminator character
        #[arg(long, default_value = "~")]
        segment_terminator: char,

        /// Element separator character
        #[arg(long, default_value = "*")]
        element_separator: char,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the declared shape of a transaction set
    Describe {
        /// Transaction-set identifier, e.g. 204
        #[arg(short, long)]
        set: String,

        /// Release version, e.g. 4010
        #[arg(short = 'r', long)]
        version: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let registry = Arc::new(DescriptorRegistry::new());
    x12_catalog::install(&registry).context("install transaction-set catalog")?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Decode {
            input,
            set,
            version,
            lenient,
            segment_terminator,
            element_separator,
            pretty,
            output,
        } => {
            let data = fs::read(&input).with_context(|| format!("read {input}"))?;
            let options = DecodeOptions {
                mode: if lenient {
                    DecodeMode::Lenient
                } else {
                    DecodeMode::Strict
                },
                delimiters: delimiters(segment_terminator, element_separator)?,
            };
            let codec = X12Codec::with_options(registry, options);
            let key = DocumentKey::x12(Version(version), set);

            let document = codec
                .decode(&data, &key)
                .with_context(|| format!("decode {input} as {key}"))?;
            for warning in &document.warnings {
                tracing::warn!("{}: {}", warning.code, warning.message);
            }

            let json = if pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };
            emit(output.as_deref(), &json)?;
        }
        Commands::Encode {
            input,
            segment_terminator,
            element_separator,
            output,
        } => {
            let json = fs::read_to_string(&input).with_context(|| format!("read {input}"))?;
            let document: Document =
                serde_json::from_str(&json).with_context(|| format!("parse {input} as JSON"))?;

            let options = DecodeOptions {
                mode: DecodeMode::Strict,
                delimiters: delimiters(segment_terminator, element_separator)?,
            };
            let codec = X12Codec::with_options(registry, options);
            let wire = codec
                .encode(&document)
                .with_context(|| format!("encode {}", document.key))?;
            emit(output.as_deref(), &wire)?;
        }
        Commands::Describe { set, version } => {
            let key = DocumentKey::x12(Version(version), set);
            let descriptor = registry
                .describe(&key)
                .with_context(|| format!("look up {key}"))?;
            print!("{}", render_descriptor(&descriptor));
        }
    }
    Ok(())
}

fn delimiters(segment: char, element: char) -> anyhow::Result<Delimiters> {
    let segment = u8::try_from(segment).context("segment terminator must be an ASCII character")?;
    let element = u8::try_from(element).context("element separator must be an ASCII character")?;
    Ok(Delimiters::default()
        .with_segment(segment)
        .with_element(element))
}

fn emit(output: Option<&str>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => fs::write(path, content).with_context(|| format!("write {path}"))?,
        None => println!("{content}"),
    }
    Ok(())
}

fn render_descriptor(descriptor: &TransactionSetDescriptor) -> String {
    let mut out = format!(
        "{} {} {} - {}\n",
        descriptor.format, descriptor.version, descriptor.set_id, descriptor.name
    );
    render_members(&descriptor.members, 1, &mut out);
    out
}

fn render_members(members: &[MemberDescriptor], depth: usize, out: &mut String) {
    for member in members {
        let indent = "  ".repeat(depth);
        let requirement = match member.requirement {
            Requirement::Mandatory => "mandatory",
            Requirement::Optional => "optional",
        };
        match &member.kind {
            MemberKind::Segment(segment) => {
                out.push_str(&format!(
                    "{indent}{:04} {} ({}) {}\n",
                    member.position, segment.tag, segment.name, requirement
                ));
            }
            MemberKind::Loop(group) => {
                out.push_str(&format!(
                    "{indent}{:04} loop {} {}{}\n",
                    member.position,
                    group.id,
                    requirement,
                    repeat_bound(group)
                ));
                render_members(&group.members, depth + 1, out);
            }
        }
    }
}

fn repeat_bound(group: &LoopDescriptor) -> String {
    match group.max_repeats {
        Some(max) => format!(" (max {max})"),
        None => String::new(),
    }
}
