use std::io::{BufRead, Write};
use std::path::Path;

use crate::batch::{self, BatchReport};
use crate::editor::{self, EditorConfig};
use crate::file_utils;
use crate::logger::Logger;
use crate::prompt::Prompter;

/// How an interactive run ended.
#[derive(Debug)]
pub enum SessionOutcome {
    InvalidDirectory,
    NoFiles,
    Cancelled,
    Completed(BatchReport),
}

/// Ask for the metadata shared by every file in the batch.
pub fn gather_config<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    logger: &Logger,
) -> anyhow::Result<EditorConfig> {
    let artist = prompter.ask("Enter the album artist's name: ")?;
    let genre = prompter.ask("Enter the genre: ")?;
    let album = prompter.ask("Enter the album name: ")?;

    let date_input = prompter.ask("Enter the release date (yyyy-mm-dd): ")?;
    let release_date = editor::release_date_or_today(&date_input, logger);

    let cover_path = prompter.ask("Enter the path to the album cover image (or press Enter to skip): ")?;
    let cover = editor::load_cover(&cover_path, logger);

    Ok(EditorConfig {
        artist,
        genre,
        album,
        release_date,
        cover,
    })
}

/// Run one interactive pass: collect metadata, find files, confirm, apply.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    logger: &Logger,
) -> anyhow::Result<SessionOutcome> {
    let config = gather_config(prompter, logger)?;
    logger.debug(&format!(
        "Artist: {}, genre: {}, album: {}, year: {}, cover: {}",
        config.artist,
        config.genre,
        config.album,
        config.release_year(),
        if config.cover.is_some() { "yes" } else { "no" }
    ));

    let folder = prompter.ask("Enter the folder path where the songs are located: ")?;
    let folder = folder.trim();
    if folder.is_empty() {
        logger.error("Invalid directory path. Please check and try again.");
        return Ok(SessionOutcome::InvalidDirectory);
    }

    let files = match file_utils::list_audio_files(Path::new(folder), logger) {
        Ok(files) => files,
        Err(e) => {
            logger.debug(&format!("{:#}", e));
            logger.error("Invalid directory path. Please check and try again.");
            return Ok(SessionOutcome::InvalidDirectory);
        }
    };
    if files.is_empty() {
        logger.info("No song files found in the directory.");
        return Ok(SessionOutcome::NoFiles);
    }

    logger.info("The following files will be modified:");
    for file in &files {
        logger.info(&file_utils::display_name(file));
    }

    if !prompter.confirm("Do you want to proceed with editing the metadata for these songs? (y/n): ")? {
        logger.info("Operation canceled.");
        return Ok(SessionOutcome::Cancelled);
    }

    let report = batch::apply_batch(&config, &files, logger);
    Ok(SessionOutcome::Completed(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileOutcome;
    use crate::cli::LogConfig;
    use crate::mpeg::tests::silent_frames;
    use chrono::{Local, NaiveDate};
    use id3::{Tag, TagLike};
    use std::fs;
    use std::io::Cursor;

    fn logger() -> Logger {
        Logger::new(LogConfig::default())
    }

    fn run_with(input: String) -> SessionOutcome {
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        run(&mut prompter, &logger()).unwrap()
    }

    #[test]
    fn test_gather_config() {
        let dir = tempfile::tempdir().unwrap();
        let cover = dir.path().join("cover.jpg");
        fs::write(&cover, b"\xFF\xD8\xFF\xE0jpeg").unwrap();

        let input = format!("Artist\nSynthpop\nAlbum\n1999-12-31\n{}\n", cover.display());
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let config = gather_config(&mut prompter, &logger()).unwrap();

        assert_eq!(config.artist, "Artist");
        assert_eq!(config.genre, "Synthpop");
        assert_eq!(config.album, "Album");
        assert_eq!(config.release_date, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(config.cover.unwrap().data, b"\xFF\xD8\xFF\xE0jpeg");
    }

    #[test]
    fn test_gather_config_defaults() {
        let before = Local::now().date_naive();
        let mut prompter = Prompter::new(Cursor::new("A\nG\nAl\nsoon\n/no/such/cover.png\n"), Vec::new());
        let config = gather_config(&mut prompter, &logger()).unwrap();
        let after = Local::now().date_naive();

        assert!(config.release_date >= before && config.release_date <= after);
        assert!(config.cover.is_none());
    }

    #[test]
    fn test_invalid_directory() {
        let outcome = run_with("A\nG\nAl\n2020-01-01\n\n/no/such/folder\n".to_string());
        assert!(matches!(outcome, SessionOutcome::InvalidDirectory));

        let outcome = run_with("A\nG\nAl\n2020-01-01\n\n\n".to_string());
        assert!(matches!(outcome, SessionOutcome::InvalidDirectory));
    }

    #[test]
    fn test_unlistable_directory_is_reported_not_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("01-Song.mp3");
        fs::write(&file, silent_frames(2)).unwrap();

        let (logger, lines) = Logger::captured(LogConfig::default());
        let input = format!("A\nG\nAl\n2020-01-01\n\n{}\ny\n", file.display());
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());
        let outcome = run(&mut prompter, &logger).unwrap();

        assert!(matches!(outcome, SessionOutcome::InvalidDirectory));
        assert!(lines
            .lock()
            .unwrap()
            .iter()
            .any(|line| line == "Invalid directory path. Please check and try again."));
        assert_eq!(fs::read(&file).unwrap(), silent_frames(2));
    }

    #[test]
    fn test_no_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"hi").unwrap();

        let outcome = run_with(format!("A\nG\nAl\n2020-01-01\n\n{}\ny\n", dir.path().display()));
        assert!(matches!(outcome, SessionOutcome::NoFiles));
    }

    #[test]
    fn test_declined_confirmation_leaves_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("01-Song.mp3");
        let original = silent_frames(2);
        fs::write(&path, &original).unwrap();

        for answer in ["n", "", "yes"] {
            let outcome = run_with(format!("A\nG\nAl\n2020-01-01\n\n{}\n{}\n", dir.path().display(), answer));
            assert!(matches!(outcome, SessionOutcome::Cancelled), "answer {:?}", answer);
            assert_eq!(fs::read(&path).unwrap(), original);
        }
    }

    #[test]
    fn test_confirmed_run_tags_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("01-Spooky Hallow.mp3");
        let broken = dir.path().join("02-Broken.mp3");
        let plain = dir.path().join("Intro.mp3");
        fs::write(&good, silent_frames(2)).unwrap();
        fs::write(&broken, "not audio").unwrap();
        fs::write(&plain, silent_frames(2)).unwrap();

        let outcome = run_with(format!(
            "The Hollows\nDarkwave\nNight Shift\n2019-10-31\n\n{}\nY\n",
            dir.path().display()
        ));
        let report = match outcome {
            SessionOutcome::Completed(report) => report,
            other => panic!("unexpected outcome: {:?}", other),
        };

        assert_eq!(report.updated(), 2);
        assert!(matches!(report.outcome(&broken), Some(FileOutcome::Failed(_))));

        let tag = Tag::read_from_path(&good).unwrap();
        assert_eq!(tag.title(), Some("Spooky Hallow"));
        assert_eq!(tag.album_artist(), Some("The Hollows"));
        assert_eq!(tag.album(), Some("Night Shift"));
        assert_eq!(tag.genre(), Some("Darkwave"));
        assert_eq!(tag.year(), Some(2019));

        assert_eq!(Tag::read_from_path(&plain).unwrap().title(), Some("Intro"));
    }
}
