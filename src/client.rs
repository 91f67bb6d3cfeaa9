//! The [`Fixerio`] client.

use reqwest::blocking::{Client, Request};
use serde_json as json;
use tracing::{debug, warn};

use crate::{
	date::HistoricalDate,
	error::{Error, Result},
	query::{self, Payload, Query},
	url::{Endpoints, LATEST_PATH},
};

/// The currency the API quotes rates against when no `base` is sent.
pub const DEFAULT_BASE: &str = "EUR";

/// A [Fixer.io](https://fixer.io/) client.
///
/// Holds the access key and the per-client defaults. Each call makes one blocking `GET` request and
/// returns the response body as is.
#[derive(Debug, Clone)]
pub struct Fixerio {
	access_key: String,
	base_currency: Option<String>,
	symbols: Option<Vec<String>>,
	secure: bool,
	endpoints: Endpoints,
	http: Client,
}

impl Fixerio {
	/// Creates a client with no defaults.
	pub fn new(access_key: impl Into<String>) -> Self {
		Self::builder(access_key).build()
	}

	/// Creates a [`Builder`] with the given access key.
	pub fn builder(access_key: impl Into<String>) -> Builder {
		Builder::new(access_key)
	}

	/// The API access key.
	#[inline] pub fn access_key(&self) -> &str { &self.access_key }
	/// The default base currency, [`None`] meaning the API's own ([`DEFAULT_BASE`]).
	#[inline] pub fn base_currency(&self) -> Option<&str> { self.base_currency.as_deref() }
	/// The default symbols, [`None`] meaning all currencies.
	#[inline] pub fn symbols(&self) -> Option<&[String]> { self.symbols.as_deref() }
	/// Whether every request goes to the HTTPS endpoint.
	#[inline] pub fn is_secure(&self) -> bool { self.secure }

	/// Gets the latest foreign exchange reference rates.
	///
	/// # Errors
	/// [`Error::ClientError`] on any failure of the request.
	pub fn latest(&self, query: Query) -> Result<json::Value> {
		let request = self.latest_request(&query)?;
		self.execute(request)
	}

	/// Gets the rates of the given day.
	///
	/// # Errors
	/// [`Error::ClientError`] on any failure of the request.
	pub fn historical_rates(&self, date: impl Into<HistoricalDate>, query: Query) -> Result<json::Value> {
		let request = self.historical_request(&date.into(), &query)?;
		self.execute(request)
	}

	/// Builds the [`latest`](Fixerio::latest) request without sending it.
	pub fn latest_request(&self, query: &Query) -> Result<Request> {
		self.request(LATEST_PATH, query)
	}

	/// Builds the [`historical_rates`](Fixerio::historical_rates) request without sending it.
	pub fn historical_request(&self, date: &HistoricalDate, query: &Query) -> Result<Request> {
		self.request(&date.as_path(), query)
	}

	/// Resolves the query parameters: call overrides first, then client defaults.
	pub fn payload(&self, query: &Query) -> Payload {
		let base = query::resolve(query.base.as_deref(), self.base_currency.as_deref());
		let symbols = query::resolve(query.symbols.as_deref(), self.symbols.as_deref());
		Payload::new(&self.access_key, base, symbols)
	}

	fn request(&self, path: &str, query: &Query) -> Result<Request> {
		let secure = query.secure || self.secure;
		let url = self.endpoints.url(secure, path);
		debug!(path, secure, "building fixer.io request");
		Ok(self.http.get(url).query(&self.payload(query)).build()?)
	}

	fn execute(&self, request: Request) -> Result<json::Value> {
		let path = request.url().path().to_owned();
		self.http
			.execute(request)
			.and_then(|response| response.error_for_status())
			.and_then(|response| response.json::<json::Value>())
			.map_err(|error| {
				let error = Error::from(error);
				warn!(%path, %error, "fixer.io request failed");
				error
			})
	}
}

/// [`Fixerio`] builder.
///
/// # Examples
/// ```
/// # use fixerio::Fixerio;
/// let client = Fixerio::builder("…").base_currency("USD").symbols(["GBP", "JPY"]).secure(true).build();
/// assert_eq!(client.base_currency(), Some("USD"));
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
	access_key: String,
	base_currency: Option<String>,
	symbols: Option<Vec<String>>,
	secure: bool,
	endpoints: Endpoints,
	http: Option<Client>,
}

impl Builder {
	/// Creates a new [`Builder`] with the given access key.
	///
	/// The key is not validated; the API rejects bad ones.
	pub fn new(access_key: impl Into<String>) -> Self {
		Self {
			access_key: access_key.into(),
			base_currency: None,
			symbols: None,
			secure: false,
			endpoints: Endpoints::default(),
			http: None,
		}
	}

	/// Sets the default base currency.
	///
	/// Unset by default, in which case no `base` is sent and the API quotes against [`DEFAULT_BASE`].
	pub fn base_currency(mut self, base_currency: impl Into<String>) -> Self {
		self.base_currency = Some(base_currency.into());
		self
	}

	/// Sets the default symbols, in request order.
	pub fn symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
		self.symbols = Some(symbols.into_iter().map(Into::into).collect());
		self
	}

	/// Sets whether all requests use the HTTPS endpoint.
	pub fn secure(mut self, secure: bool) -> Self {
		self.secure = secure;
		self
	}

	/// Sets the base URLs.
	pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
		self.endpoints = endpoints;
		self
	}

	/// Sets the HTTP client, e.g. to configure timeouts.
	pub fn http_client(mut self, http: Client) -> Self {
		self.http = Some(http);
		self
	}

	/// Builds the [`Fixerio`] client.
	pub fn build(self) -> Fixerio {
		Fixerio {
			access_key: self.access_key,
			base_currency: self.base_currency,
			symbols: self.symbols,
			secure: self.secure,
			endpoints: self.endpoints,
			http: self.http.unwrap_or_else(Client::new),
		}
	}
}
