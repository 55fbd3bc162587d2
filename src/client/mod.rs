//! Client module
//!
//! Sends one request to the server and reports the reply on the console.

pub mod request;
pub mod send;
pub mod template;

use crate::cli::ClientArgs;
use crate::error::ClientError;
use request::{Assembled, UNKNOWN_METHOD};
use std::path::Path;

pub use request::{assemble, OutgoingRequest};
pub use send::{save, send, Reply};

/// Assemble, send and report one request
pub async fn run(args: &ClientArgs) -> Result<(), ClientError> {
    let request = match assemble(args)? {
        Assembled::Ready(request) => request,
        Assembled::Refused(reason) => {
            println!("{reason}");
            return Ok(());
        }
    };

    if !request::is_http_method(&request.method) {
        println!("{UNKNOWN_METHOD}");
    }

    let reply = send(&request).await?;
    println!("{}", reply.summary());
    if args.toprint {
        println!("Client received information: {}", reply.body_text());
    }

    if args.tosave {
        match &args.filename {
            Some(filename) => {
                let path = save(&reply.body, Path::new(send::SAVE_DIR), filename)?;
                println!("Saved received information to {}", path.display());
            }
            None => println!("Saving requested but no file name given."),
        }
    }

    Ok(())
}
