//! Request dispatch module
//!
//! Entry point for HTTP request processing: admission check, method dispatch, body intake.

use crate::config::AppState;
use crate::error::HandlerError;
use crate::handler::admission::{self, Admission};
use crate::handler::body::{BodyEvent, BodyIntake};
use crate::handler::slot::ResponseSlot;
use crate::handler::static_files;
use crate::http::supported::is_supported_method;
use crate::http::{self, HttpResponse};
use crate::logger::Logger;
use hyper::body::{Body, Bytes};
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE};
use hyper::http::request::Parts;
use hyper::http::uri::PathAndQuery;
use hyper::{Method, Request};
use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Always produces exactly one response. The part of the body dispatch did not read is
/// drained by a background task.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<HttpResponse, Infallible>
where
    B: Body<Data = Bytes> + Send + Unpin + 'static,
    B::Error: Display + Send,
{
    let logger = Arc::clone(&state.logger);
    logger.log("Server just received request. Processing request url, method, headers and body.");

    let (parts, body) = req.into_parts();
    let target = parts
        .uri
        .path_and_query()
        .map_or("/", PathAndQuery::as_str);
    logger.log(&format!("Processed url of request: {target}"));
    logger.log(&format!("Processed method of request: {}", parts.method));
    logger.log_request_headers(&parts.headers);

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    let mut intake = BodyIntake::new(
        body,
        state.config.server.read_timeout(),
        state.config.server.max_body_size,
        Arc::clone(&logger),
    );
    let mut slot = ResponseSlot::new();

    // 1. Admission
    if admission::check(&parts.method, content_type.as_deref(), &logger) == Admission::Rejected {
        let outcome = http::build_406_response(content_type.as_deref()).map_err(HandlerError::from);
        respond(&mut slot, outcome, &parts.method, &logger);
    }

    // 2. Dispatch
    if slot.is_pending() {
        let outcome = dispatch(&parts, target, content_type.as_deref(), &mut intake, &state).await;
        respond(&mut slot, outcome, &parts.method, &logger);
    }

    // 3. Whatever is left of the body
    tokio::spawn(async move {
        // Failures were logged by the intake
        let _ = intake.drain().await;
    });

    Ok(slot.into_response().unwrap_or_else(http::build_500_response))
}

/// Method-specific branch
async fn dispatch<B>(
    parts: &Parts,
    target: &str,
    content_type: Option<&str>,
    intake: &mut BodyIntake<B>,
    state: &AppState,
) -> Result<HttpResponse, HandlerError>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    let logger = &state.logger;
    logger.log(&format!("Begin to form response for {} request", parts.method));

    match parts.method {
        ref method if !is_supported_method(method) => {
            logger.log(&format!(
                "Received unsupported method {method}. Forming error response to client."
            ));
            Ok(http::build_405_response()?)
        }
        Method::GET => {
            static_files::serve_file(target, content_type, &state.config.server.files_dir, logger)
                .await
        }
        Method::POST => {
            if exceeds_body_size(parts, state.config.server.max_body_size, logger) {
                return Ok(http::build_413_response()?);
            }
            accept_post_body(intake, logger).await
        }
        _ => Ok(http::build_options_response(
            &state.config.server.server_name,
        )?),
    }
}

/// Whether the declared Content-Length is over the limit
///
/// A missing or unparsable header is left to the intake, which enforces the same cap.
fn exceeds_body_size(parts: &Parts, max_body_size: u64, logger: &Logger) -> bool {
    let Some(content_length) = parts.headers.get(CONTENT_LENGTH) else {
        return false;
    };
    match content_length.to_str().map(str::parse::<u64>) {
        Ok(Ok(size)) if size > max_body_size => {
            logger.log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            true
        }
        Ok(Ok(_)) => false,
        _ => {
            logger.log_warning("Invalid Content-Length value, skipping size check");
            false
        }
    }
}

/// POST is answered as soon as the first body chunk arrives
async fn accept_post_body<B>(
    intake: &mut BodyIntake<B>,
    logger: &Logger,
) -> Result<HttpResponse, HandlerError>
where
    B: Body<Data = Bytes> + Unpin,
    B::Error: Display,
{
    match intake.next_event().await {
        BodyEvent::Data(_) => Ok(http::build_201_response()?),
        BodyEvent::End => {
            logger.log_warning("POST request ended without a body");
            Ok(http::build_400_response()?)
        }
        BodyEvent::TooLarge { .. } => Ok(http::build_413_response()?),
        BodyEvent::Error(reason) => Err(HandlerError::Body(reason)),
    }
}

/// Store the outcome of a step as the terminal response
fn respond(
    slot: &mut ResponseSlot,
    outcome: Result<HttpResponse, HandlerError>,
    method: &Method,
    logger: &Logger,
) {
    let response = outcome.unwrap_or_else(|e| {
        logger.log_error(&format!(
            "Something went wrong during execution on server, while processing {method} request method: {e}"
        ));
        http::build_500_response()
    });

    let status = response.status();
    if slot.send(response) {
        logger.log(&format!("Handled {method} request with status {status}."));
    } else {
        logger.log_warning(&format!(
            "Response for {method} request already sent, dropping {status}"
        ));
    }
}
