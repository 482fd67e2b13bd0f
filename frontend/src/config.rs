/// Base URL of the UmamiBox server.
///
/// `BACKEND_URL` at build time wins. Otherwise debug builds talk to the local
/// server and release builds use the origin that served the bundle.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url.trim_end_matches('/'),
        None if cfg!(debug_assertions) => "http://localhost:3000",
        None => "",
    }
}
