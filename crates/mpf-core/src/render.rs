// crates/mpf-core/src/render.rs

use std::io::Write;

use crate::error::Result;
use crate::header::HeaderInfo;
use crate::options::TextPolicy;
use crate::record::Record;

/// Six header lines: size, format code, illustration, code type, code length,
/// data type. Nothing is written unless every text field decodes.
pub fn write_header<W: Write>(w: &mut W, h: &HeaderInfo, policy: TextPolicy) -> Result<()> {
    let format_code = h.format_code_text(policy)?;
    let illustration = h.illustration_text(policy)?;
    let code_type = h.code_type_text(policy)?;
    let data_type = h.data_type_text(policy)?;

    writeln!(w, "{}", h.header_size)?;
    writeln!(w, "{format_code}")?;
    writeln!(w, "{illustration}")?;
    writeln!(w, "{code_type}")?;
    writeln!(w, "{}", h.label_byte_width)?;
    writeln!(w, "{data_type}")?;
    Ok(())
}

/// `<label hex>` then ` %3d` per vector element.
pub fn write_record<W: Write>(w: &mut W, r: &Record) -> Result<()> {
    w.write_all(r.label_hex().as_bytes())?;
    for v in &r.vector {
        write!(w, " {v:>3}")?;
    }
    writeln!(w)?;
    Ok(())
}
