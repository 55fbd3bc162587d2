//! Request body intake
//!
//! Reads the body frame by frame and accumulates data chunks in arrival order, up to a size
//! cap. The intake is owned by one request; it reports each step as a [`BodyEvent`].

use crate::logger::Logger;
use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

/// One step of the body stream
#[derive(Debug)]
pub enum BodyEvent {
    /// A non-empty data chunk, already appended to the buffer
    Data(Bytes),
    /// End of stream
    End,
    /// The body grew past the size cap; nothing more is read
    TooLarge { limit: u64 },
    /// The stream failed or stalled past the read timeout
    Error(String),
}

pub struct BodyIntake<B> {
    body: B,
    buffer: Vec<u8>,
    chunks: usize,
    finished: bool,
    read_timeout: Option<Duration>,
    max_size: u64,
    logger: Arc<Logger>,
}

impl<B> BodyIntake<B>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    pub const fn new(
        body: B,
        read_timeout: Option<Duration>,
        max_size: u64,
        logger: Arc<Logger>,
    ) -> Self {
        Self {
            body,
            buffer: Vec::new(),
            chunks: 0,
            finished: false,
            read_timeout,
            max_size,
            logger,
        }
    }

    /// Read until the next data chunk, end of stream, or error
    ///
    /// Trailers and empty data frames are skipped. After `End`, `TooLarge` or `Error` every
    /// call returns `End`.
    pub async fn next_event(&mut self) -> BodyEvent {
        if self.finished {
            return BodyEvent::End;
        }

        loop {
            let frame = match self.read_timeout {
                Some(limit) => match tokio::time::timeout(limit, self.body.frame()).await {
                    Ok(frame) => frame,
                    Err(_) => {
                        return self.fail(format!(
                            "no body data received within {}ms",
                            limit.as_millis()
                        ));
                    }
                },
                None => self.body.frame().await,
            };

            match frame {
                None => {
                    self.finished = true;
                    return BodyEvent::End;
                }
                Some(Err(e)) => return self.fail(e.to_string()),
                Some(Ok(frame)) => {
                    let Ok(data) = frame.into_data() else {
                        continue;
                    };
                    if data.is_empty() {
                        continue;
                    }
                    let total = u64::try_from(self.buffer.len() + data.len()).unwrap_or(u64::MAX);
                    if total > self.max_size {
                        return self.overflow(total);
                    }
                    self.buffer.extend_from_slice(&data);
                    self.chunks += 1;
                    self.logger.log(&format!(
                        "Received body of request: chunk {} ({} bytes)",
                        self.chunks,
                        data.len()
                    ));
                    return BodyEvent::Data(data);
                }
            }
        }
    }

    /// Consume the rest of the body and return everything accumulated
    pub async fn drain(mut self) -> Result<Vec<u8>, String> {
        loop {
            match self.next_event().await {
                BodyEvent::Data(_) => {}
                BodyEvent::End => {
                    self.logger.log(&format!(
                        "Ended the request. Accumulated {} bytes in {} chunks.",
                        self.buffer.len(),
                        self.chunks
                    ));
                    return Ok(self.buffer);
                }
                BodyEvent::TooLarge { limit } => {
                    return Err(format!("body exceeds {limit} bytes"));
                }
                BodyEvent::Error(e) => return Err(e),
            }
        }
    }

    fn overflow(&mut self, total: u64) -> BodyEvent {
        self.finished = true;
        self.buffer = Vec::new();
        self.logger.log_error(&format!(
            "Request body too large: at least {total} bytes (max: {})",
            self.max_size
        ));
        BodyEvent::TooLarge {
            limit: self.max_size,
        }
    }

    fn fail(&mut self, reason: String) -> BodyEvent {
        self.finished = true;
        self.logger
            .log_error(&format!("Request body stream failed: {reason}"));
        BodyEvent::Error(reason)
    }
}


#[cfg(test)]
mod tests {
    use super::test_body::{ChunkedBody, StalledBody};
    use super::*;
    use http_body_util::{Empty, Full};

    const NO_CAP: u64 = u64::MAX;

    fn logger() -> Arc<Logger> {
        Arc::new(Logger::silent())
    }

    #[tokio::test]
    async fn test_chunks_accumulate_in_order() {
        let mut intake =
            BodyIntake::new(ChunkedBody::new(&["ab", "", "cd", "ef"]), None, NO_CAP, logger());

        match intake.next_event().await {
            BodyEvent::Data(chunk) => assert_eq!(chunk, "ab"),
            other => panic!("expected data, got {other:?}"),
        }

        let all = intake.drain().await.unwrap();
        assert_eq!(all, b"abcdef");
    }

    #[tokio::test]
    async fn test_empty_data_frames_are_not_chunks() {
        let mut intake = BodyIntake::new(ChunkedBody::new(&["", ""]), None, NO_CAP, logger());
        assert!(matches!(intake.next_event().await, BodyEvent::End));
        assert!(intake.drain().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_ends_immediately() {
        let mut intake = BodyIntake::new(Empty::<Bytes>::new(), None, NO_CAP, logger());
        assert!(matches!(intake.next_event().await, BodyEvent::End));
        assert!(matches!(intake.next_event().await, BodyEvent::End));
    }

    #[tokio::test]
    async fn test_full_body_is_one_chunk() {
        let intake = BodyIntake::new(Full::new(Bytes::from("payload")), None, NO_CAP, logger());
        assert_eq!(intake.drain().await.unwrap(), b"payload");
    }

    #[tokio::test]
    async fn test_stream_error_is_reported() {
        let mut intake =
            BodyIntake::new(ChunkedBody::failing(&["ok"], "connection reset"), None, NO_CAP, logger());
        assert!(matches!(intake.next_event().await, BodyEvent::Data(_)));
        match intake.next_event().await {
            BodyEvent::Error(e) => assert_eq!(e, "connection reset"),
            other => panic!("expected error, got {other:?}"),
        }
        // Finished streams stay finished
        assert!(matches!(intake.next_event().await, BodyEvent::End));
    }

    #[tokio::test]
    async fn test_drain_propagates_error() {
        let intake = BodyIntake::new(ChunkedBody::failing(&[], "broken pipe"), None, NO_CAP, logger());
        assert_eq!(intake.drain().await.unwrap_err(), "broken pipe");
    }

    #[tokio::test]
    async fn test_stalled_body_times_out() {
        let mut intake =
            BodyIntake::new(StalledBody, Some(Duration::from_millis(20)), NO_CAP, logger());
        match intake.next_event().await {
            BodyEvent::Error(e) => assert!(e.contains("20ms"), "unexpected reason: {e}"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_body_over_cap_stops_reading() {
        let mut intake =
            BodyIntake::new(ChunkedBody::new(&["1234", "5678", "9"]), None, 8, logger());
        assert!(matches!(intake.next_event().await, BodyEvent::Data(_)));
        assert!(matches!(intake.next_event().await, BodyEvent::Data(_)));
        match intake.next_event().await {
            BodyEvent::TooLarge { limit } => assert_eq!(limit, 8),
            other => panic!("expected overflow, got {other:?}"),
        }
        assert!(matches!(intake.next_event().await, BodyEvent::End));
    }

    #[tokio::test]
    async fn test_drain_is_bounded() {
        let chunk: &'static str = Box::leak("x".repeat(64 * 1024).into_boxed_str());
        let chunks = vec![chunk; 256];
        let intake = BodyIntake::new(ChunkedBody::new(&chunks), None, 1024 * 1024, logger());
        let err = intake.drain().await.unwrap_err();
        assert_eq!(err, "body exceeds 1048576 bytes");
    }

    #[tokio::test]
    async fn test_body_at_cap_is_accepted() {
        let intake = BodyIntake::new(ChunkedBody::new(&["1234", "5678"]), None, 8, logger());
        assert_eq!(intake.drain().await.unwrap(), b"12345678");
    }
}
