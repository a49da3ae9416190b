//! Misc utility stuff

use fs_err as fs;
use std::error;
use std::io::{self, BufRead, Write};
use std::fmt;
use std::path::Path;

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::util::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::util::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::util::Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom error
    Error(String),
    /// pass through io::Error
    IoError(io::Error),
    /// wrong command line, holds the usage line
    Usage(String),
    /// input file does not exist, holds the path as given
    NotFound(String),
}
/// Result type for name-sorter
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Error::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
    /// return true if this is a message for the user, rather than a failure
    pub const fn is_notice(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::NotFound(_))
    }
}

err_type!(io::Error, Error::IoError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Error(s) => write!(f, "{}", s)?,
            Error::IoError(s) => write!(f, "IoError : {}", s)?,
            Error::Usage(s) => write!(f, "{}", s)?,
            Error::NotFound(s) => write!(f, "Error: File '{}' not found.", s)?,
        }
        Ok(())
    }
}

/// true if the line is empty, or nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Read every non-blank line of the named file, verbatim and in order.
///
/// Line endings (`\n` or `\r\n`) are removed, everything else is kept,
/// including leading and trailing spaces.
pub fn read_names<P: AsRef<Path>>(name: P) -> Result<Vec<String>> {
    let file = io::BufReader::new(fs::File::open(name.as_ref())?);
    let mut names = Vec::new();
    for line in file.lines() {
        let line = line?;
        if !is_blank(&line) {
            names.push(line);
        }
    }
    Ok(names)
}

/// output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name. An existing file is truncated.
pub fn get_writer<P: AsRef<Path>>(name: P) -> Result<Outfile> {
    let name = name.as_ref();
    let inner: Box<dyn Write> = {
        if name == Path::new("-") {
            Box::new(io::stdout())
        } else if name == Path::new("--") {
            Box::new(io::stderr())
        } else {
            Box::new(fs::File::create(name)?)
        }
    };
    Ok(io::BufWriter::new(inner))
}

/// write each name, followed by a newline
pub fn write_names<S: AsRef<str>>(w: &mut dyn Write, names: &[S]) -> Result<()> {
    for x in names {
        w.write_all(x.as_ref().as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank(" \t\u{a0}\u{3000}"));
        assert!(!is_blank("  a "));
    }

    #[test]
    fn messages() {
        let e = Error::NotFound("names.txt".to_string());
        assert!(e.is_notice());
        assert_eq!(e.to_string(), "Error: File 'names.txt' not found.");
        let e = Error::Usage("Usage: name-sorter <file-path>".to_string());
        assert!(e.is_notice());
        assert_eq!(e.to_string(), "Usage: name-sorter <file-path>");
        let e: Error = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(e.suppress());
        assert!(!e.is_notice());
        let r: Result<()> = err!("bad method '{}'", "foo");
        assert_eq!(r.unwrap_err().to_string(), "bad method 'foo'");
    }

    #[test]
    fn read_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "  John   Smith  \r\n\n   \nAlice Brown\n").unwrap();
        let names = read_names(&path).unwrap();
        assert_eq!(names, vec!["  John   Smith  ", "Alice Brown"]);

        let mut out = Vec::new();
        write_names(&mut out, &names).unwrap();
        assert_eq!(out, b"  John   Smith  \nAlice Brown\n");
    }

    #[test]
    fn writer_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "a much longer previous content\n").unwrap();
        let mut w = get_writer(&path).unwrap();
        write_names(&mut w, &["Zoe Zebra"]).unwrap();
        drop(w);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Zoe Zebra\n");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let e = read_names(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(e, Error::IoError(_)));
    }
}
