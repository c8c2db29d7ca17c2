//! Backward extraction of the trailing headings of a markdown file.
//!
//! The notes files this tool appends to grow without bound, so the peek
//! path must never read a whole file into memory. The scan here walks the
//! file back to front in fixed-size windows and reassembles heading
//! records (a `\n## `-style marker plus everything up to the next marker)
//! until it has the requested number of them.

use std::io::{self, Read, Seek, SeekFrom};

use memchr::memmem;

/// Size in bytes of the backward read window.
pub const CHUNK_SIZE: u64 = 256;

/// Return the suffix of `file` that covers its last `count` headings at
/// `level`, markers included, byte-for-byte.
///
/// The returned string always starts with the heading marker itself. When
/// the file holds fewer than `count` matching headings the entire file
/// content is returned instead, and `count == 0` yields an empty string
/// without touching the file body. Seek and read failures propagate
/// unchanged.
pub fn tail_headings<F>(file: &mut F, count: usize, level: u8) -> io::Result<String>
where
    F: Read + Seek,
{
    tail_headings_chunked(file, count, level, CHUNK_SIZE)
}

/// Marker that opens a heading record: a newline, `level` hashes, a space.
/// Anchoring on the newline keeps `## ` inside body text from matching.
fn heading_marker(level: u8) -> Vec<u8> {
    let mut marker = Vec::with_capacity(level as usize + 2);
    marker.push(b'\n');
    marker.extend(std::iter::repeat(b'#').take(level as usize));
    marker.push(b' ');
    marker
}

fn tail_headings_chunked<F>(
    file: &mut F,
    wanted: usize,
    level: u8,
    chunk_size: u64,
) -> io::Result<String>
where
    F: Read + Seek,
{
    if wanted == 0 {
        return Ok(String::new());
    }
    let filesize = file.seek(SeekFrom::End(0))?;
    let marker = heading_marker(level);

    let mut chunk = vec![0u8; chunk_size as usize];
    let mut offset = chunk_size;
    let mut prev_offset = 0u64;
    let mut count = 0usize;
    let mut out: Vec<u8> = Vec::new();
    let mut overflow: Vec<u8> = Vec::new();

    while offset < filesize + chunk_size {
        // Only the bytes not covered by an earlier window are new; once
        // the window overlaps the file start the slice shrinks so nothing
        // is counted twice.
        let covered = offset.min(filesize);
        let len = (covered - prev_offset) as usize;
        file.seek(SeekFrom::End(-(covered as i64)))?;
        file.read_exact(&mut chunk[..len])?;

        // Newly read (earlier) bytes first, then the unresolved prefix of
        // the previous window. A marker split across the window boundary
        // becomes contiguous here.
        let mut data = Vec::with_capacity(len + overflow.len());
        data.extend_from_slice(&chunk[..len]);
        data.append(&mut overflow);

        let matches = memmem::find_iter(&data, &marker).count();
        count += matches;
        if count > wanted {
            // The quota is exceeded, so every straddled marker near this
            // boundary is resolved and the cut is final. Skip the markers
            // that precede the requested range; the quota may also have
            // been filled exactly by later windows, in which case all of
            // the new matches fall before the cut and `out` already is
            // the answer.
            let excess = count - wanted;
            if let Some(pos) = memmem::find_iter(&data, &marker).nth(excess) {
                let mut section = data.split_off(pos);
                section.append(&mut out);
                out = section;
            }
            return into_string(out);
        }
        match memmem::find(&data, &marker) {
            Some(pos) => {
                // Everything from the earliest confirmed marker onward is
                // complete; the bytes before it may still end with half a
                // marker and go back into circulation.
                let mut section = data.split_off(pos);
                section.append(&mut out);
                out = section;
                overflow = data;
            }
            None => overflow = data,
        }

        prev_offset = offset;
        offset += chunk_size;
    }

    if count < wanted {
        // Fewer headings than requested: the caller gets the whole file,
        // leading unheaded content included.
        overflow.append(&mut out);
        return into_string(overflow);
    }
    into_string(out)
}

fn into_string(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
