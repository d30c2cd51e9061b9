//! Reading a byte stream without trusting the peer to stop.

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

const CHUNK_SIZE: usize = 8 * 1024;

#[derive(Debug, Error)]
pub enum BoundedReadError {
    #[error("the data size exceeds the limit of {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    #[error("failed to read stream")]
    Io(#[from] std::io::Error),
}

/// Read the whole stream, failing once more than `limit` bytes show up.
///
/// Every read is sized so the buffer never holds more than `limit + 1`
/// bytes: the single byte past the limit is the probe that tells a stream
/// ending exactly at `limit` apart from an oversized one.
pub async fn read_at_most<R>(reader: &mut R, limit: u64) -> Result<Vec<u8>, BoundedReadError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let ceiling = limit.saturating_add(1);
    let mut data = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let remaining = ceiling - data.len() as u64;
        if remaining == 0 {
            return Err(BoundedReadError::PayloadTooLarge { limit });
        }

        let want = remaining.min(CHUNK_SIZE as u64) as usize;
        let n = reader.read(&mut chunk[..want]).await?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = data.len(), limit, "bounded read finished");

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_everything_below_the_limit() {
        let mut input: &[u8] = b"hello\n";

        let data = read_at_most(&mut input, 100).await.unwrap();

        assert_eq!(data, b"hello\n");
    }

    #[tokio::test]
    async fn test_stream_ending_exactly_at_the_limit_is_accepted() {
        let payload = vec![7u8; 10];
        let mut input: &[u8] = &payload;

        let data = read_at_most(&mut input, 10).await.unwrap();

        assert_eq!(data, payload);
    }

    #[tokio::test]
    async fn test_one_byte_over_the_limit_fails() {
        let payload = vec![7u8; 11];
        let mut input: &[u8] = &payload;

        let err = read_at_most(&mut input, 10).await.unwrap_err();

        assert!(matches!(err, BoundedReadError::PayloadTooLarge { limit: 10 }));
    }

    #[tokio::test]
    async fn test_empty_stream_yields_empty_buffer() {
        let mut input: &[u8] = b"";

        let data = read_at_most(&mut input, 1).await.unwrap();

        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_stops_reading_one_byte_past_the_limit() {
        // Large input, tiny limit: the reader must not drain the stream.
        let payload = vec![1u8; 3 * CHUNK_SIZE];
        let mut input: &[u8] = &payload;

        let err = read_at_most(&mut input, 4).await.unwrap_err();

        assert!(matches!(err, BoundedReadError::PayloadTooLarge { limit: 4 }));
        assert_eq!(input.len(), payload.len() - 5);
    }

    #[tokio::test]
    async fn test_handles_streams_larger_than_one_chunk() {
        let payload: Vec<u8> = (0..(2 * CHUNK_SIZE + 17)).map(|i| i as u8).collect();
        let mut input: &[u8] = &payload;

        let data = read_at_most(&mut input, payload.len() as u64)
            .await
            .unwrap();

        assert_eq!(data, payload);
    }

    #[tokio::test]
    async fn test_surfaces_io_errors() {
        let mut input = broken_reader();

        let err = read_at_most(&mut input, 100).await.unwrap_err();

        assert!(matches!(err, BoundedReadError::Io(_)));
    }

    fn broken_reader() -> impl AsyncRead + Unpin {
        struct Broken;

        impl AsyncRead for Broken {
            fn poll_read(
                self: std::pin::Pin<&mut Self>,
                _cx: &mut std::task::Context<'_>,
                _buf: &mut tokio::io::ReadBuf<'_>,
            ) -> std::task::Poll<std::io::Result<()>> {
                std::task::Poll::Ready(Err(std::io::Error::other("connection reset")))
            }
        }

        Broken
    }
}
