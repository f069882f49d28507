use crate::config::EncoderConfig;
use crate::error::{EncodingError, Result};
use crate::value::Encodable;
use bytes::{BufMut, Bytes, BytesMut};
use std::slice;

pub const STRING_OFFSET: u8 = 0x80;
pub const LIST_OFFSET: u8 = 0xc0;

const SHORT_PAYLOAD_LIMIT: usize = 56;

pub struct Encoder {
    buffer: BytesMut,
    config: EncoderConfig,
}

/// A list whose items are still being written. Its payload starts at `start`.
struct OpenList<'a> {
    items: slice::Iter<'a, Encodable>,
    start: usize,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(EncoderConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Encoder {
            buffer: BytesMut::with_capacity(config.initial_capacity),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn finish(self) -> Bytes {
        self.buffer.freeze()
    }

    pub fn append(&mut self, value: &Encodable) -> Result<()> {
        match value {
            Encodable::List(items) => self.encode_list(items),
            scalar => self.append_scalar(scalar),
        }
    }

    /// Frames `bytes` as a string. A lone byte below `0x80` is its own encoding.
    pub fn encode_bytes(&mut self, bytes: &[u8]) {
        match bytes {
            [byte] if *byte < STRING_OFFSET => self.buffer.put_u8(*byte),
            _ => self.put_framed(bytes, STRING_OFFSET),
        }
    }

    /// Encodes `items` as one list. On error nothing is left in the buffer.
    pub fn encode_list(&mut self, items: &[Encodable]) -> Result<()> {
        let mark = self.buffer.len();
        let result = self.write_list(items);
        if result.is_err() {
            self.buffer.truncate(mark);
        }
        result
    }

    fn write_list(&mut self, items: &[Encodable]) -> Result<()> {
        let mut open = Vec::new();
        self.open_list(&mut open, items)?;

        while let Some(list) = open.last_mut() {
            match list.items.next() {
                Some(Encodable::List(children)) => self.open_list(&mut open, children)?,
                Some(scalar) => self.append_scalar(scalar)?,
                None => {
                    let start = list.start;
                    open.pop();
                    self.close_list(start);
                }
            }
        }
        Ok(())
    }

    fn open_list<'a>(
        &mut self,
        open: &mut Vec<OpenList<'a>>,
        items: &'a [Encodable],
    ) -> Result<()> {
        if let Some(max_depth) = self.config.max_depth {
            if open.len() >= max_depth {
                return Err(EncodingError::unencodable(format!(
                    "list nested deeper than {} levels",
                    max_depth
                )));
            }
        }

        open.push(OpenList {
            items: items.iter(),
            start: self.buffer.len(),
        });
        Ok(())
    }

    fn close_list(&mut self, start: usize) {
        let payload = self.buffer.split_off(start);
        self.put_framed(&payload, LIST_OFFSET);
    }

    fn append_scalar(&mut self, scalar: &Encodable) -> Result<()> {
        let payload = scalar.payload()?;
        self.encode_bytes(&payload);
        Ok(())
    }

    fn put_framed(&mut self, payload: &[u8], offset: u8) {
        self.buffer.extend_from_slice(&length_prefix(payload.len(), offset));
        self.buffer.extend_from_slice(payload);
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame prefix for a payload of `len` bytes.
///
/// Short payloads get the single byte `offset + len`. Longer ones get
/// `offset + 55 + k` followed by the `k` bytes of `len` in minimal big-endian.
pub fn length_prefix(len: usize, offset: u8) -> Vec<u8> {
    if len < SHORT_PAYLOAD_LIMIT {
        return vec![offset + len as u8];
    }

    let len_bytes = encode_length(len);
    let mut prefix = Vec::with_capacity(1 + len_bytes.len());
    prefix.push(offset + 55 + len_bytes.len() as u8);
    prefix.extend_from_slice(&len_bytes);
    prefix
}

fn encode_length(len: usize) -> Vec<u8> {
    let bytes = len.to_be_bytes();
    let first_non_zero = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[first_non_zero..].to_vec()
}
