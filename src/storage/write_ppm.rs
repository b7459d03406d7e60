use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

/// Writes tightly packed 8-bit RGB pixels as a binary PPM (P6) image.
pub fn write_ppm(
    width: u32,
    height: u32,
    rgb: &[u8],
    filepath: impl AsRef<Path>,
) -> std::io::Result<()> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "{width}x{height} image needs {expected} bytes, got {}",
                rgb.len()
            ),
        ));
    }

    let filepath = filepath.as_ref();
    let mut file = BufWriter::new(std::fs::File::create(filepath)?);

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(rgb)?;
    file.flush()?;

    debug!(path = %filepath.display(), width, height, "wrote ppm");

    Ok(())
}
