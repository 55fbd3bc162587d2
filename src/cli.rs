//! Command-line arguments for the server and client binaries
//!
//! Boolean switches accept an optional value, so `-f` turns file logging on and
//! `--verbose false` turns console echo off.

use clap::{ArgAction, Parser};

/// Serve files and answer requests over plain HTTP
#[derive(Debug, Parser)]
#[command(name = "exchange-server", version)]
pub struct ServerArgs {
    /// Enables console logging of server flow. Enabled by default.
    #[arg(short = 'v', long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub verbose: Option<bool>,

    /// Enables logging to file. Disabled by default.
    #[arg(short = 'f', long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub logging: Option<bool>,

    /// Port number on which server is launched. By default is 8000.
    #[arg(long)]
    pub port: Option<u16>,

    /// Configuration file, extension optional
    #[arg(short = 'c', long, default_value = "config")]
    pub config: String,
}

/// Send one HTTP request assembled from flags or a template file
#[derive(Debug, Parser)]
#[command(name = "exchange-client", version)]
pub struct ClientArgs {
    /// Path to request template file. Data from file is used to do the request.
    #[arg(short = 't', long)]
    pub template: Option<String>,

    /// Url of the resource the client wants to access.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Method that will be sent to the server.
    #[arg(short = 'm', long)]
    pub method: Option<String>,

    /// Path to a file whose contents are sent as the body.
    #[arg(short = 'r', long)]
    pub resource: Option<String>,

    /// Enables saving the received body. Disabled by default.
    #[arg(short = 's', long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", default_value = "false")]
    pub tosave: bool,

    /// Enables printing the received body. Enabled by default.
    #[arg(short = 'l', long, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true", default_value = "true")]
    pub toprint: bool,

    /// Content-Type header of the request.
    #[arg(short = 'q', long)]
    pub contenttype: Option<String>,

    /// Content-Length header of the request.
    #[arg(short = 'w', long)]
    pub contentlength: Option<String>,

    /// Authorization header of the request.
    #[arg(short = 'a', long)]
    pub authorization: Option<String>,

    /// Plain text body of the request.
    #[arg(short = 'p', long)]
    pub plainbody: Option<String>,

    /// File name under ./saved the received body is written to.
    #[arg(short = 'j', long)]
    pub filename: Option<String>,
}
