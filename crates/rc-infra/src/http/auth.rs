use rc_core::BasicAuth;
use reqwest::RequestBuilder;

/// Attach HTTP basic auth to `request` unless `auth` is empty.
///
/// The credential format is left to reqwest: a value without a colon is sent
/// as a username with an empty password.
pub fn apply_basic_auth(request: RequestBuilder, auth: &BasicAuth) -> RequestBuilder {
    match auth.credentials() {
        Some((username, password)) => request.basic_auth(username, password),
        None => request,
    }
}
