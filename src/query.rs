//! Call-time overrides and the request [`Payload`].

use serde::Serialize;

/// Per-call overrides of a [`Fixerio`](crate::Fixerio) client's defaults.
///
/// Empty values count as absent, so the client default applies.
///
/// # Examples
/// ```
/// # use fixerio::Query;
/// let query = Query::new().base("USD").symbols(["GBP", "JPY"]).secure(true);
/// ```
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Query {
	/// The currency to quote rates against.
	pub base: Option<String>,
	/// The currencies to get rates for.
	pub symbols: Option<Vec<String>>,
	/// Use the HTTPS endpoint for this call.
	///
	/// This can only turn HTTPS on; a secure client stays secure.
	pub secure: bool,
}

impl Query {
	/// Creates a [`Query`] that overrides nothing.
	#[inline] pub fn new() -> Self { Self::default() }

	/// Sets the [`base`](Query::base).
	pub fn base(mut self, base: impl Into<String>) -> Self {
		self.base = Some(base.into());
		self
	}

	/// Sets the [`symbols`](Query::symbols).
	pub fn symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
		self.symbols = Some(symbols.into_iter().map(Into::into).collect());
		self
	}

	/// Sets the [`secure`](Query::secure) flag.
	pub fn secure(mut self, secure: bool) -> Self {
		self.secure = secure;
		self
	}
}

/// Query parameters of a single request.
///
/// Always starts with `access_key`, followed by `base` and `symbols` when present.
#[derive(Debug, Hash, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(Vec<(&'static str, String)>);

impl Payload {
	/// Creates a payload, omitting empty `base` and `symbols`.
	///
	/// Symbols are comma-joined in their given order.
	pub fn new(access_key: &str, base: Option<&str>, symbols: Option<&[String]>) -> Self {
		let mut params = Vec::with_capacity(3);
		params.push(("access_key", access_key.to_owned()));
		if let Some(base) = base.filter(|base| !base.is_empty()) {
			params.push(("base", base.to_owned()));
		}
		if let Some(symbols) = symbols.filter(|symbols| !symbols.is_empty()) {
			params.push(("symbols", symbols.join(",")));
		}
		Self(params)
	}

	/// Gets the value of a parameter.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
	}

	/// Gets the parameters in order.
	#[inline] pub fn as_slice(&self) -> &[(&'static str, String)] { &self.0 }
}

/// Picks the first non-empty value.
pub(crate) fn resolve<'a, T: ?Sized + IsEmpty>(overriding: Option<&'a T>, default: Option<&'a T>) -> Option<&'a T> {
	overriding.filter(|value| !value.is_empty())
		.or(default)
		.filter(|value| !value.is_empty())
}

pub(crate) trait IsEmpty { fn is_empty(&self) -> bool; }
impl IsEmpty for str { #[inline] fn is_empty(&self) -> bool { str::is_empty(self) } }
impl<T> IsEmpty for [T] { #[inline] fn is_empty(&self) -> bool { <[T]>::is_empty(self) } }

#[cfg(test)]
mod test {
	use super::*;

	fn strings(values: &[&str]) -> Vec<String> { values.iter().map(|s| s.to_string()).collect() }

	#[test]
	fn test_payload_minimal() {
		let payload = Payload::new("key", None, None);
		assert_eq!(payload.as_slice(), &[("access_key", "key".to_owned())]);
		assert_eq!(payload.get("base"), None);
		assert_eq!(payload.get("symbols"), None);
	}

	#[test]
	fn test_payload_full() {
		let symbols = strings(&["USD", "GBP", "JPY"]);
		let payload = Payload::new("key", Some("CHF"), Some(symbols.as_slice()));
		assert_eq!(payload.as_slice(), &[
			("access_key", "key".to_owned()),
			("base", "CHF".to_owned()),
			("symbols", "USD,GBP,JPY".to_owned()),
		]);
	}

	#[test]
	fn test_payload_omits_empty() {
		let empty: Vec<String> = Vec::new();
		let payload = Payload::new("", Some(""), Some(empty.as_slice()));
		assert_eq!(payload.as_slice(), &[("access_key", String::new())]);
	}

	#[test]
	fn test_resolve_precedence() {
		assert_eq!(resolve(Some("USD"), Some("CHF")), Some("USD"));
		assert_eq!(resolve(None, Some("CHF")), Some("CHF"));
		assert_eq!(resolve(Some(""), Some("CHF")), Some("CHF"));
		assert_eq!(resolve::<str>(None, None), None);
		assert_eq!(resolve(Some(""), Some("")), None);

		let defaults = strings(&["GBP"]);
		let empty: Vec<String> = Vec::new();
		assert_eq!(resolve(Some(empty.as_slice()), Some(defaults.as_slice())), Some(defaults.as_slice()));
	}

	#[test]
	fn test_query_builder() {
		let query = Query::new().base("USD").symbols(["GBP", "JPY"]).secure(true);
		assert_eq!(query.base.as_deref(), Some("USD"));
		assert_eq!(query.symbols, Some(strings(&["GBP", "JPY"])));
		assert!(query.secure);
		assert_eq!(Query::new(), Query::default());
	}
}
