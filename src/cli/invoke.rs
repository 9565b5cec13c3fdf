//! Invoke functions by name or route.

use tracing::debug;

use crate::cli::{output, RequestArgs};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::functions::{HttpRequest, HttpResponse, TimerInfo, Trigger};
use crate::error::{Error, Result};

/// Invoke a function by name.
///
/// HTTP functions get a request on their own route built from `request`;
/// timer functions get a timer with `past_due` set as asked.
pub fn by_name(config: &Config, name: &str, request: &RequestArgs, past_due: bool) -> Result<()> {
    let host = crate::cli::host(config)?;

    match &host.app().get(name)?.trigger {
        Trigger::Http { route, .. } => {
            let req = build_request(&format!("/{}/{}", constants::ROUTE_PREFIX, route), request);
            let resp = host.invoke_http(name, &req)?;
            print_response(&resp)
        }
        Trigger::Timer { .. } => {
            host.invoke_timer(name, &TimerInfo { past_due })?;
            output::success(&format!("{} completed", output::name(name)));
            Ok(())
        }
    }
}

/// Invoke the HTTP function bound to `path`.
pub fn by_route(config: &Config, path: &str, request: &RequestArgs) -> Result<()> {
    let host = crate::cli::host(config)?;
    let req = build_request(path, request);
    let resp = host.dispatch_http(path, &req)?;
    print_response(&resp)
}

fn build_request(url: &str, args: &RequestArgs) -> HttpRequest {
    let mut req = HttpRequest::new(args.method, url);
    for (key, value) in &args.query {
        req = req.with_param(key.as_str(), value.as_str());
    }
    if let Some(body) = &args.body {
        req = req.with_body(body.as_bytes());
    }
    debug!(method = %req.method, url = %req.url, params = req.params.len(), "built request");
    req
}

/// Print status and body; a non-2xx status becomes an error so the exit code
/// reflects it.
fn print_response(resp: &HttpResponse) -> Result<()> {
    output::status(resp.status());
    println!("{}", resp.body());

    if resp.is_success() {
        Ok(())
    } else {
        Err(Error::HttpStatus(resp.status()))
    }
}
