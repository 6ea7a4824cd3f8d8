//! Line splitting for checked input.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid UTF-8
//! are replaced, and a read error ends the input.

use std::io::{BufRead, ErrorKind};

/// Iterator over the lines of a reader, without their terminators.
pub struct LossyLines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> LossyLines<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    /// Drop the `\n` of a `\r\n` pair whose `\r` was just consumed.
    fn skip_paired_newline(&mut self) {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    if buf.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(_) => {
                    self.done = true;
                    return;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => {
                    self.done = true;
                    break;
                }
            };
            if buf.is_empty() {
                self.done = true;
                break;
            }

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let ended_with_cr = buf[pos] == b'\r';
                    line.extend_from_slice(&buf[..pos]);
                    self.reader.consume(pos + 1);
                    if ended_with_cr {
                        self.skip_paired_newline();
                    }
                    return Some(String::from_utf8_lossy(&line).into_owned());
                }
                None => {
                    let len = buf.len();
                    line.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }

        if line.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&line).into_owned())
        }
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
