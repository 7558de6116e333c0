use encoding_rs::ISO_8859_2;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::Path;

// read a file as utf-8, falling back to ISO-8859-2 for legacy collections
pub fn read_to_string(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            log::debug!("{} is not utf-8, decoding as ISO-8859-2", path.display());
            read_to_string_non_utf8_encoding(path)
        }
        Err(e) => Err(e),
    }
}

pub fn read_to_string_non_utf8_encoding(path: &Path) -> io::Result<String> {
    let source_file = File::open(path)?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(ISO_8859_2))
        .build(source_file);
    let mut dest = String::new();
    decoder.read_to_string(&mut dest)?;
    Ok(dest)
}
