//! Delimited record output.
//!
//! An encoded sequence is persisted as one text record: each symbol as a
//! decimal digit, joined by commas, terminated by a newline.
//!
//! ```text
//! 0,1,1,0,0,1,0,1
//! ```
//!
//! File output replaces the target wholesale: the record is written to a
//! sibling temporary file and renamed over the target, so a failed write
//! never leaves a truncated record at the target path.

use crate::error::Result;
use crate::manchester::ManchesterSequence;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Render the record body (no terminator).
///
/// An empty sequence renders as the empty string.
pub fn render_record(seq: &ManchesterSequence) -> String {
    let digits: Vec<String> = seq.digits().map(|d| d.to_string()).collect();
    digits.join(",")
}

/// Write the record, with its newline terminator, to an arbitrary sink.
///
/// The sink is flushed before returning so the caller observes either a
/// complete record or an error.
pub fn write_record<W: Write>(seq: &ManchesterSequence, writer: &mut W) -> Result<()> {
    writer.write_all(render_record(seq).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the record to `path`, replacing any prior content.
///
/// The record goes to a `.tmp` sibling first and is renamed into place,
/// so the target is either untouched or holds the complete new record.
/// The temporary file is removed if the write fails.
pub fn write_record_file(seq: &ManchesterSequence, path: &Path) -> Result<()> {
    let tmp_path = path.with_extension("tmp");

    let result = (|| -> Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        write_record(seq, &mut file)?;
        file.sync_all()?;
        Ok(())
    })();

    if let Err(err) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manchester::encode;
    use crate::sequence::BitSequence;

    fn encoded(bits: Vec<u8>) -> ManchesterSequence {
        encode(&BitSequence::new(bits).unwrap()).unwrap()
    }

    #[test]
    fn test_render_known_sequence() {
        let seq = encoded(vec![0, 1, 1, 0]);
        assert_eq!(render_record(&seq), "0,1,1,0,0,1,0,1");
    }

    #[test]
    fn test_render_empty() {
        let seq = encoded(Vec::new());
        assert_eq!(render_record(&seq), "");
    }

    #[test]
    fn test_write_record_terminates_with_newline() {
        let seq = encoded(vec![1, 0]);
        let mut sink: Vec<u8> = Vec::new();
        write_record(&seq, &mut sink).unwrap();
        assert_eq!(sink, b"1,0,0,1\n");
    }

    #[test]
    fn test_write_record_file_round_trip() {
        let seq = encoded(vec![0, 1, 1, 0]);
        let path = std::env::temp_dir().join("manchester_record_round_trip.csv");

        write_record_file(&seq, &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "0,1,1,0,0,1,0,1\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_record_file_replaces_prior_content() {
        let path = std::env::temp_dir().join("manchester_record_replace.csv");
        fs::write(&path, "stale content that is much longer than the record\n").unwrap();

        let seq = encoded(vec![1]);
        write_record_file(&seq, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1,0\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_record_file_leaves_no_temp_file() {
        let path = std::env::temp_dir().join("manchester_record_no_tmp.csv");
        let seq = encoded(vec![0, 0]);

        write_record_file(&seq, &path).unwrap();
        assert!(!path.with_extension("tmp").exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_record_file_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("manchester_no_such_dir")
            .join("record.csv");
        let seq = encoded(vec![0]);

        let result = write_record_file(&seq, &path);
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
