//! URL building

/// Base URL of the plain HTTP endpoint.
pub const BASE_URL: &str = "http://data.fixer.io/api/";
/// Base URL of the HTTPS endpoint.
pub const SECURE_BASE_URL: &str = "https://data.fixer.io/api/";
/// Path of the [`latest`](crate::Fixerio::latest) endpoint.
pub const LATEST_PATH: &str = "latest";

/// The pair of base URLs a [`Fixerio`](crate::Fixerio) client chooses from.
///
/// Each base URL is expected to end with `/`, the endpoint path is appended to it verbatim.
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub struct Endpoints {
	/// Used when the request is not secure.
	pub http: String,
	/// Used when the request is secure.
	pub secure: String,
}

impl Default for Endpoints {
	fn default() -> Self {
		Self {
			http: BASE_URL.to_owned(),
			secure: SECURE_BASE_URL.to_owned(),
		}
	}
}

impl Endpoints {
	/// Creates [`Endpoints`] from the two base URLs.
	pub fn new(http: impl Into<String>, secure: impl Into<String>) -> Self {
		Self { http: http.into(), secure: secure.into() }
	}

	/// Gets the base URL for the given security flag.
	#[inline] pub fn base(&self, secure: bool) -> &str {
		if secure { &self.secure } else { &self.http }
	}

	/// Joins the base URL for the security flag with an endpoint path.
	pub fn url(&self, secure: bool, path: &str) -> String {
		let base = self.base(secure);
		let mut url = String::with_capacity(base.len() + path.len());
		url.push_str(base);
		url.push_str(path);
		url
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_url() {
		let endpoints = Endpoints::default();
		assert_eq!(endpoints.url(false, LATEST_PATH), "http://data.fixer.io/api/latest");
		assert_eq!(endpoints.url(true, LATEST_PATH), "https://data.fixer.io/api/latest");
		assert_eq!(endpoints.url(true, "2020-03-15"), "https://data.fixer.io/api/2020-03-15");
	}
}
