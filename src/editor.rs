use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};
use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike, Version};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::logger::Logger;
use crate::mpeg;

const RELEASE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Raw bytes of a cover image, embedded as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverImage {
    pub data: Vec<u8>,
}

impl CoverImage {
    /// MIME type sniffed from the image bytes, `image/jpeg` when unknown.
    pub fn mime_type(&self) -> String {
        image::guess_format(&self.data)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| "image/jpeg".to_string())
    }
}

/// Metadata applied to every file in a batch. Built once from user input.
#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub artist: String,
    pub genre: String,
    pub album: String,
    pub release_date: NaiveDate,
    pub cover: Option<CoverImage>,
}

impl EditorConfig {
    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }
}

fn track_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^\d+-").expect("valid track prefix regex"))
}

/// Strip a leading track number like `01-` from a file stem.
/// Only the first prefix is removed: `10-20-Track` becomes `20-Track`.
pub fn clean_title(stem: &str) -> String {
    track_prefix().replace(stem, "").into_owned()
}

/// Parse a release date, or `None` if it matches none of the accepted formats.
pub fn parse_release_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    RELEASE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// Parse a release date, falling back to today with a warning.
pub fn release_date_or_today(input: &str, logger: &Logger) -> NaiveDate {
    match parse_release_date(input) {
        Some(date) => date,
        None => {
            logger.warn("Invalid date format. Setting release date to today.");
            Local::now().date_naive()
        }
    }
}

/// Load cover art from `path`. A blank path or a path that can't be read
/// means "no cover"; neither is an error.
pub fn load_cover(path: &str, logger: &Logger) -> Option<CoverImage> {
    let path = path.trim();
    if path.is_empty() {
        logger.debug("No cover image given.");
        return None;
    }

    let path = Path::new(path);
    if !path.is_file() {
        logger.warn("Image file not found. Skipping album cover.");
        return None;
    }

    match fs::read(path) {
        Ok(data) => {
            logger.debug(&format!("Loaded cover image ({} bytes)", data.len()));
            Some(CoverImage { data })
        }
        Err(e) => {
            logger.warn(&format!("Could not read image file ({}). Skipping album cover.", e));
            None
        }
    }
}

/// Rewrite the ID3 tag of one MP3 with the configured metadata.
/// The title comes from the file name; other frames already present are kept.
pub fn write_tags(config: &EditorConfig, file_path: &Path) -> anyhow::Result<()> {
    mpeg::ensure_mpeg_audio(file_path)?;

    let mut tag = match Tag::read_from_path(file_path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
        Err(e) => return Err(e).context("reading ID3 tag"),
    };

    let stem = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    tag.set_title(clean_title(&stem));
    tag.set_album_artist(config.artist.as_str());
    tag.set_album(config.album.as_str());
    tag.set_genre(config.genre.as_str());
    tag.set_year(config.release_year());

    if let Some(cover) = &config.cover {
        tag.remove_all_pictures();
        tag.add_frame(Picture {
            mime_type: cover.mime_type(),
            picture_type: PictureType::CoverFront,
            description: "cover".to_string(),
            data: cover.data.clone(),
        });
    }

    tag.write_to_path(file_path, Version::Id3v23)
        .context("writing ID3 tag")?;

    Ok(())
}
