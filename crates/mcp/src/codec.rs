// Request framing for the stdio transport

use bytes::{Bytes, BytesMut};
use std::io;
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder};

/// Longest accepted request line
pub const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

/// One newline-delimited frame read from the client
#[derive(Debug, PartialEq)]
pub enum Frame {
    /// Raw line bytes, without the trailing newline
    Line(Bytes),
    /// A line longer than the limit; its bytes are discarded up to the next newline
    Oversized,
}

/// Splits input on `\n` without failing on malformed lines.
///
/// `FramedRead` ends the stream after any decode error, so bad lines are
/// reported as frames and only I/O failures surface as errors.
#[derive(Debug)]
pub struct RequestCodec {
    inner: AnyDelimiterCodec,
}

impl RequestCodec {
    pub fn new(max_line_bytes: usize) -> Self {
        Self {
            inner: AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), b"\n".to_vec(), max_line_bytes),
        }
    }
}

impl Default for RequestCodec {
    fn default() -> Self {
        Self::new(MAX_LINE_BYTES)
    }
}

fn to_frame(result: Result<Option<Bytes>, AnyDelimiterCodecError>) -> io::Result<Option<Frame>> {
    match result {
        Ok(line) => Ok(line.map(Frame::Line)),
        Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => Ok(Some(Frame::Oversized)),
        Err(AnyDelimiterCodecError::Io(e)) => Err(e),
    }
}

impl Decoder for RequestCodec {
    type Item = Frame;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        to_frame(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> io::Result<Option<Frame>> {
        to_frame(self.inner.decode_eof(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(codec: &mut RequestCodec, input: &[u8]) -> Vec<Frame> {
        let mut buf = BytesMut::from(input);
        let mut frames = Vec::new();
        while let Some(frame) = codec.decode_eof(&mut buf).unwrap() {
            frames.push(frame);
        }
        frames
    }

    #[test]
    fn test_splits_lines() {
        let frames = decode_all(&mut RequestCodec::default(), b"{\"a\":1}\n{\"b\":2}\n");
        assert_eq!(
            frames,
            vec![
                Frame::Line(Bytes::from_static(b"{\"a\":1}")),
                Frame::Line(Bytes::from_static(b"{\"b\":2}")),
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_is_still_a_line() {
        let frames = decode_all(&mut RequestCodec::default(), b"\xff\xfe garbage\nok\n");
        assert_eq!(
            frames,
            vec![
                Frame::Line(Bytes::from_static(b"\xff\xfe garbage")),
                Frame::Line(Bytes::from_static(b"ok")),
            ]
        );
    }

    #[test]
    fn test_oversized_line_resyncs_at_next_newline() {
        let mut codec = RequestCodec::new(8);
        let frames = decode_all(&mut codec, b"0123456789abcdef\nshort\n");
        assert_eq!(frames, vec![Frame::Oversized, Frame::Line(Bytes::from_static(b"short"))]);
    }

    #[test]
    fn test_unterminated_last_line() {
        let frames = decode_all(&mut RequestCodec::default(), b"tail");
        assert_eq!(frames, vec![Frame::Line(Bytes::from_static(b"tail"))]);
    }
}
