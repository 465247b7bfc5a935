// crates/mpf-cli/src/cmd/filter.rs

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use mpf_core::format::DEFAULT_DIMENSIONALITY;
use mpf_core::render::{write_header, write_record};
use mpf_core::{DecodeOptions, Decoder, DimensionPolicy, TextPolicy};

use crate::io::mpf::open_mpf;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input .mpf path
    pub path: PathBuf,

    /// Vector width to enforce, ignoring the header's declared value
    #[arg(long, default_value_t = DEFAULT_DIMENSIONALITY, value_parser = clap::value_parser!(u32).range(1..))]
    pub dimensionality: u32,

    /// Use the dimensionality declared in the header instead of --dimensionality
    #[arg(long)]
    pub trust_declared_dimensionality: bool,

    /// Fail on header text that is not valid UTF-8 instead of replacing it
    #[arg(long)]
    pub strict_text: bool,
}

impl FilterArgs {
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            dimension: if self.trust_declared_dimensionality {
                DimensionPolicy::Declared
            } else {
                DimensionPolicy::Fixed(self.dimensionality)
            },
            text: if self.strict_text { TextPolicy::Strict } else { TextPolicy::Lossy },
        }
    }
}

pub fn run(args: FilterArgs) -> anyhow::Result<()> {
    let opts = args.decode_options();
    let decoder = open_mpf(&args.path, opts)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // flush whatever was rendered even when decoding stops early
    let result = emit(&mut out, decoder, &args.path);
    out.flush().context("flush stdout")?;
    result
}

fn emit<W: Write>(out: &mut W, decoder: Decoder<BufReader<File>>, path: &Path) -> anyhow::Result<()> {
    let opts = decoder.options();
    write_header(out, decoder.header(), opts.text)
        .with_context(|| format!("render header: {}", path.display()))?;

    let records = decoder
        .records()
        .with_context(|| format!("decode {}", path.display()))?;
    for rec in records {
        let rec = rec.with_context(|| format!("decode {}", path.display()))?;
        write_record(out, &rec).context("write record")?;
    }
    Ok(())
}
