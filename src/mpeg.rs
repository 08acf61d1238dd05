use anyhow::Context;
use lofty::file::FileType;
use lofty::probe::Probe;
use std::path::Path;

/// Check that `path` holds MPEG audio. The container is identified from the
/// file contents, not the extension, and then fully parsed.
pub fn ensure_mpeg_audio(path: &Path) -> anyhow::Result<()> {
    let probe = Probe::open(path)
        .context("opening audio file")?
        .guess_file_type()
        .context("reading file header")?;

    match probe.file_type() {
        Some(FileType::Mpeg) => {}
        Some(other) => anyhow::bail!("not an MPEG audio file (looks like {:?})", other),
        None => anyhow::bail!("not an MPEG audio file (unrecognized format)"),
    }

    probe.read().context("parsing MPEG audio")?;
    Ok(())
}
