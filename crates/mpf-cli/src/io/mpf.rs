// crates/mpf-cli/src/io/mpf.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use mpf_core::{DecodeOptions, Decoder};

/// Open `path` and decode its header. The file handle lives inside the
/// returned decoder and is closed when it is dropped.
pub fn open_mpf(path: &Path, opts: DecodeOptions) -> anyhow::Result<Decoder<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let decoder = Decoder::new(BufReader::new(file), opts)
        .with_context(|| format!("read header: {}", path.display()))?;
    Ok(decoder)
}
