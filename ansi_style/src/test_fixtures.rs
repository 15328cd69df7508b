// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Result, Write};

/// Output sink that rejects every write, like a closed pipe.
#[derive(Debug, Default)]
pub struct BrokenPipeWriter;

impl Write for BrokenPipeWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize> {
        Err(Error::new(ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
