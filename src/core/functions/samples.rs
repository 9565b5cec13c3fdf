//! The sample functions.
//!
//! Each handler is a few lines of formatting, a settings lookup or a blob
//! copy. [`definitions`] lists them with their triggers and bindings.

use tracing::info;

use super::function::{Context, FunctionDef, TimerInfo};
use super::http::{HttpRequest, HttpResponse};
use super::trigger::BlobBinding;
use crate::core::constants::EXAMPLE_SECRET;
use crate::core::secrets::Resolver;

pub const HTTP_SAMPLE: &str = "http_function_sample";
pub const KEYVAULT_SAMPLE: &str = "keyvault_function_sample";
pub const BLOB_REPLICATION_SAMPLE: &str = "http_blob_replication_function_sample";
pub const TIMER_SAMPLE: &str = "timer_function_sample";
pub const BLOB_APPENDING_SAMPLE: &str = "timer_blob_appending_function";
pub const BLOB_WIPING_SAMPLE: &str = "timer_blob_wiping_function";

const INPUT_BLOB: &str = "inputblob";
const OUTPUT_BLOB: &str = "outputblob";
const LOG_BLOB: &str = "%BlobOutpath%/log.txt";

/// Every sample with its trigger and bindings.
pub fn definitions() -> Vec<FunctionDef> {
    vec![
        FunctionDef::http(HTTP_SAMPLE, "req", greet),
        FunctionDef::http(KEYVAULT_SAMPLE, "keyvault", read_example_secret),
        FunctionDef::http(BLOB_REPLICATION_SAMPLE, "file", replicate_blob)
            .bind(BlobBinding::input(
                INPUT_BLOB,
                "blob-replication-container/input.txt",
            ))
            .bind(BlobBinding::output(
                OUTPUT_BLOB,
                "blob-replication-container/replicated_output.txt",
            )),
        FunctionDef::timer(TIMER_SAMPLE, "0 */5 * * * *", report_tick),
        FunctionDef::timer(BLOB_APPENDING_SAMPLE, "%Schedule%", append_run_line)
            .bind(BlobBinding::input(INPUT_BLOB, LOG_BLOB))
            .bind(BlobBinding::output(OUTPUT_BLOB, LOG_BLOB)),
        FunctionDef::timer(BLOB_WIPING_SAMPLE, "0 59 0 * * *", wipe_log)
            .bind(BlobBinding::output(OUTPUT_BLOB, LOG_BLOB)),
    ]
}

/// Greet the caller by the `name` query parameter or JSON body field.
pub fn greet(req: &HttpRequest, _ctx: &mut Context<'_>) -> HttpResponse {
    info!("HTTP-triggered function processed a request.");

    let name = req
        .param("name")
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .or_else(|| {
            req.json().ok().and_then(|body| {
                body.get("name")
                    .and_then(|n| n.as_str())
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
            })
        });

    // Responses are text/plain, so echoing the name unescaped is safe.
    match name {
        Some(name) => HttpResponse::ok(format!(
            "Hello, {}. This HTTP-triggered function executed successfully.",
            name
        )),
        None => HttpResponse::ok(
            "This HTTP-triggered function executed successfully. Pass a name in the query string or in the request body for a personalized response.",
        ),
    }
}

/// Resolve `ExampleSecret` and report whether it is usable.
pub fn read_example_secret(_req: &HttpRequest, ctx: &mut Context<'_>) -> HttpResponse {
    info!("HTTP-triggered function processed a request.");

    match Resolver::new(ctx.settings)
        .verbose(true)
        .resolve(EXAMPLE_SECRET)
    {
        Ok(_) => HttpResponse::ok(format!(
            "The value of the environment variable configured in the appsettings under \"{}\" has been logged.",
            EXAMPLE_SECRET
        )),
        Err(e) => HttpResponse::internal_error(e.to_string()),
    }
}

/// Copy the input blob to the output blob.
pub fn replicate_blob(_req: &HttpRequest, ctx: &mut Context<'_>) -> HttpResponse {
    let contents = ctx.bindings.input(INPUT_BLOB).unwrap_or_default().to_string();
    info!("HTTP-triggered function processed {} bytes", contents.len());

    ctx.bindings.set(OUTPUT_BLOB, contents);
    info!("Successfully copied the blob");

    HttpResponse::ok("Copied the given input blob to the specified output blob")
}

/// Log the run time, noting when the timer is late.
pub fn report_tick(timer: &TimerInfo, ctx: &mut Context<'_>) {
    if timer.past_due {
        info!("The timer is past due!");
    }
    info!("Timer-triggered function ran at {}", ctx.now.to_rfc3339());
}

/// Append a line with the run time to the log blob.
pub fn append_run_line(_timer: &TimerInfo, ctx: &mut Context<'_>) {
    let existing = ctx.bindings.input(INPUT_BLOB).unwrap_or_default();
    let appended = format!(
        "{}\nTimer-triggered function ran at {}",
        existing,
        ctx.now.to_rfc3339()
    );
    ctx.bindings.set(OUTPUT_BLOB, appended);
}

/// Empty the log blob.
pub fn wipe_log(_timer: &TimerInfo, ctx: &mut Context<'_>) {
    info!(
        "Timer-triggered function wiped the specified blob file at {}",
        ctx.now.to_rfc3339()
    );
    ctx.bindings.set(OUTPUT_BLOB, "");
}
