//! fnsamples - serverless function samples with a local host.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface (the local host)
//! │   ├── list          # List functions
//! │   ├── invoke        # Invoke by name or route
//! │   ├── resolve       # Resolve a setting as a secret
//! │   └── schedule      # Preview timer runs
//! └── core/             # Core library components
//!     ├── config        # fnsamples.toml management
//!     ├── settings      # App settings sources and %Name% expansion
//!     ├── secrets       # Key vault reference validation
//!     ├── diagnostics   # Resolver diagnostic sink
//!     └── functions/    # Triggers, bindings, registry, host, samples
//! ```
//!
//! # Example
//!
//! ```
//! use fnsamples::core::secrets;
//! use fnsamples::core::settings::MapSettings;
//!
//! let settings = MapSettings::new().with("ExampleSecret", "1234");
//! assert_eq!(secrets::resolve(&settings, "ExampleSecret", false).unwrap(), "1234");
//! ```

pub mod cli;
pub mod core;
pub mod error;
