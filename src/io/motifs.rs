/// Motif list reader with decompression support
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Error;

/// Read sequence motifs from a text file, one motif per line.
///
/// Files ending in `.gz` are decompressed transparently. Blank lines are
/// skipped; an input with no motifs at all is an error, since there is
/// nothing to cluster.
pub fn read_motif_file(path: &Path) -> Result<Vec<Vec<u8>>, Error> {
    let file = File::open(path).map_err(|e| Error::io(e, path))?;

    let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut motifs = Vec::new();
    for line_result in reader.lines() {
        let line = line_result.map_err(|e| Error::io(e, path))?;
        if line.is_empty() {
            continue;
        }
        motifs.push(line.into_bytes());
    }

    if motifs.is_empty() {
        return Err(Error::Motif(format!(
            "no motifs found in {}",
            path.display()
        )));
    }

    Ok(motifs)
}
