use std::future::Future;
use std::pin::Pin;
use pagelet_toolkit::error::Error;
use pagelet_toolkit::url::Url;
use serde_json::Value as JsonValue;

/* One GET, resolved to decoded JSON. Implementations live outside this crate
 * so the loader can be driven on any target: the browser one sits in
 * pagelet-network, tests supply canned ones.
 */
pub trait FragmentChannel {
    fn get_json(&self, url: &Url, timeout: Option<f64>) -> Pin<Box<dyn Future<Output=Result<JsonValue,Error>>>>;
}
