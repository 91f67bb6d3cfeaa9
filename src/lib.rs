//! [Fixer.io](https://fixer.io/) foreign exchange rates API library.
//!
//! # Examples
//! ```no_run
//! # use fixerio::{Fixerio, Query};
//! let client = Fixerio::builder("access key").symbols(["USD", "GBP"]).build();
//! let latest = client.latest(Query::new())?;
//! let historical = client.historical_rates("2020-03-15", Query::new().base("USD").secure(true))?;
//! # Ok::<(), fixerio::Error>(())
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod date;
pub mod error;
pub mod query;
pub mod url;

pub use client::{Builder, Fixerio, DEFAULT_BASE};
pub use date::HistoricalDate;
pub use error::{Error, Result};
pub use query::{Payload, Query};
pub use url::Endpoints;
