//! C header and source generation

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Bytes per emitted line and per unit counted in `<base>_len`.
pub const UNIT_BYTES: usize = 4;

/// Number of complete units in `bytes`. Trailing bytes that do not fill a unit are ignored.
pub fn unit_count(bytes: &[u8]) -> usize {
    bytes.len() / UNIT_BYTES
}

/// Header guard token: upper-cased base name followed by `_H`.
pub fn guard_token(base: &str) -> String {
    format!("{}_H", base.to_uppercase())
}

/// Render `<base>.h`: include guard, extern pointer and length constant.
pub fn render_header(base: &str, units: usize) -> String {
    let guard = guard_token(base);
    format!(
        "#ifndef {guard}\n\
         #define {guard}\n\
         \n\
         extern float *{base};\n\
         const int {base}_len = {units};\n\
         \n\
         #endif\n"
    )
}

/// Render `<base>.c`: one line of four hex byte literals per unit.
/// The last line carries no trailing comma.
pub fn render_source(base: &str, bytes: &[u8]) -> String {
    let units = unit_count(bytes);
    let mut out = String::with_capacity(64 + units * 30);
    let _ = write!(out, "#include \"{base}.h\"\n\nconst float *{base} {{\n");
    for (i, unit) in bytes.chunks_exact(UNIT_BYTES).enumerate() {
        let _ = write!(
            out,
            "    0x{:02x}, 0x{:02x}, 0x{:02x}, 0x{:02x}",
            unit[0], unit[1], unit[2], unit[3]
        );
        out.push_str(if i + 1 < units { ",\n" } else { "\n" });
    }
    out.push_str("};\n");
    out
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

pub fn write_header(path: &Path, base: &str, units: usize) -> Result<()> {
    write_file(path, &render_header(base, units))
}

pub fn write_source(path: &Path, base: &str, bytes: &[u8]) -> Result<()> {
    write_file(path, &render_source(base, bytes))
}
