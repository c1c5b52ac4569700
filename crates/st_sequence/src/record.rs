use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use colored::*;
use log::{debug, warn};

/// Marks the header line of a record.
pub const HEADER_MARKER: char = '>';

/// File extension of written records.
pub const RECORD_EXTENSION: &str = "fasta";


#[derive(Debug)]
pub enum RecordError {
    Io(io::Error),
    MissingHeader,
    MissingPayload,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Io(e) => write!(f, "I/O error: {}", e),
            RecordError::MissingHeader => {
                write!(f, "Missing header line starting with '{}'", HEADER_MARKER)
            }
            RecordError::MissingPayload => write!(f, "Missing sequence line"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RecordError {
    fn from(e: io::Error) -> Self {
        RecordError::Io(e)
    }
}


/// Identifier, free-text description and (annotated) sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub identifier: String,
    pub description: String,
    pub payload: String,
}

impl Record {
    pub fn new(identifier: &str, description: &str, payload: &str) -> Self {
        Record {
            identifier: identifier.to_string(),
            description: description.to_string(),
            payload: payload.to_string(),
        }
    }

    pub fn header(&self) -> String {
        format!("{}{} {}", HEADER_MARKER, self.identifier, self.description)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{}", self.payload)
    }
}

/// Default file name of a record: `<identifier>.fasta`.
pub fn record_file_name(identifier: &str) -> String {
    format!("{}.{}", identifier, RECORD_EXTENSION)
}

/// Write the two-line record to any sink.
pub fn write_record_to<W: Write>(mut writer: W, record: &Record) -> io::Result<()> {
    write!(writer, "{}", record)?;
    writer.flush()
}

/// Create (or truncate) `path` and write the record into it.
pub fn write_record<P: AsRef<Path>>(path: P, record: &Record) -> Result<(), RecordError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_record_to(BufWriter::new(file), record)?;
    debug!("Wrote record '{}' ({} symbols) to {}",
        record.identifier, record.payload.chars().count(), path.display());
    Ok(())
}

/// Parse a record from a reader.
///
/// The header is the first non-empty line and must start with `>`. The
/// identifier ends at the first space; the remainder is the description.
/// The payload is the next non-empty line. Further lines are ignored.
pub fn read_record<R: BufRead>(reader: R) -> Result<Record, RecordError> {
    let mut lines = reader.lines();

    let mut header = None;
    for line in lines.by_ref() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        header = Some(line.strip_prefix(HEADER_MARKER)
            .ok_or(RecordError::MissingHeader)?
            .to_string());
        break;
    }
    let header = header.ok_or(RecordError::MissingHeader)?;
    let (identifier, description) = header.split_once(' ')
        .unwrap_or((header.as_str(), ""));

    let mut payload = None;
    for line in lines.by_ref() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            payload = Some(line.to_string());
            break;
        }
    }
    let payload = payload.ok_or(RecordError::MissingPayload)?;

    let mut extra = 0;
    for line in lines {
        if !line?.trim().is_empty() {
            extra += 1;
        }
    }
    if extra > 0 {
        warn!("{} ignoring {} trailing line(s) after record '{}'", "WARNING:".red(), extra, identifier);
    }

    Ok(Record::new(identifier, description, &payload))
}

pub fn read_record_file<P: AsRef<Path>>(path: P) -> Result<Record, RecordError> {
    let reader = BufReader::new(File::open(path)?);
    read_record(reader)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn test_write_record_to_buffer() {
        let mut buf = Vec::new();
        write_record_to(&mut buf, &Record::new("test1", "demo", "ACGTname123")).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">test1 demo\nACGTname123\n");
    }

    #[test]
    fn test_write_record_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(record_file_name("test1"));
        write_record(&path, &Record::new("test1", "demo", "ACGTname123")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(">test1 demo"));
        assert_eq!(lines.next(), Some("ACGTname123"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_record_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.fasta");
        fs::write(&path, "old content\nthat is much longer than the new record\nand more\n").unwrap();
        write_record(&path, &Record::new("x", "", "AC")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ">x \nAC\n");
    }

    #[test]
    fn test_write_record_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("r.fasta");
        let err = write_record(&path, &Record::new("r", "d", "ACGT")).unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }

    #[test]
    fn test_read_record_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.fasta");
        write_record(&path, &Record::new("seq", "a longer description", "GGAnnaCT")).unwrap();
        let rec = read_record_file(&path).unwrap();
        assert_eq!(rec, Record::new("seq", "a longer description", "GGAnnaCT"));
        assert_eq!(rec.to_string(), ">seq a longer description\nGGAnnaCT\n");
    }

    #[test]
    fn test_read_record_malformed() {
        let err = read_record(Cursor::new("ACGT\n")).unwrap_err();
        assert!(matches!(err, RecordError::MissingHeader));

        let err = read_record(Cursor::new("")).unwrap_err();
        assert!(matches!(err, RecordError::MissingHeader));

        let err = read_record(Cursor::new(">id desc\n\n")).unwrap_err();
        assert!(matches!(err, RecordError::MissingPayload));
    }

    #[test]
    fn test_read_record_header_without_description() {
        let rec = read_record(Cursor::new("\n>only_id\r\nACGT\r\n")).unwrap();
        assert_eq!(rec.identifier, "only_id");
        assert_eq!(rec.description, "");
        assert_eq!(rec.payload, "ACGT");
    }
}
