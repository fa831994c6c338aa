use std::fs::{self, File};
use std::io::{self, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use crate::error::{Error, Result};
use crate::service::traits::i_service::DecompressServiceTrait;

/// 每次讀取的解壓縮區塊大小，記憶體用量與檔案大小無關
pub const CHUNK_SIZE: usize = 16 * 1024;

pub struct ZstdService;

impl ZstdService {
    pub fn new() -> Self {
        ZstdService
    }
}

impl Default for ZstdService {
    fn default() -> Self {
        Self::new()
    }
}

impl DecompressServiceTrait for ZstdService {
    fn decompress(&self, input: &Path, output: &Path) -> Result<u64> {
        match stream_decompress(input, output) {
            Ok(written) => Ok(written),
            Err(source) => {
                if output.exists() {
                    if let Err(e) = fs::remove_file(output) {
                        log::warn!("無法刪除部分解壓的檔案 {}：{}", output.display(), e);
                    }
                }
                Err(Error::decompression(input, source))
            }
        }
    }
}

fn stream_decompress(input: &Path, output: &Path) -> io::Result<u64> {
    let mut decoder = zstd::stream::read::Decoder::new(File::open(input)?)?;
    let mut writer = BufWriter::new(File::create(output)?);
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut written = 0u64;

    loop {
        let n = match decoder.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..n])?;
        written += n as u64;
    }

    writer.flush()?;
    Ok(written)
}
