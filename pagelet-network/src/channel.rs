use std::future::Future;
use std::pin::Pin;
use pagelet_data::FragmentChannel;
use pagelet_toolkit::error::Error;
use pagelet_toolkit::url::Url;
use serde_json::Value as JsonValue;
use crate::ajax::PglAjax;

/* The browser-side implementation of the transport seam: one fetch() per
 * call, no coordination between calls.
 */
#[derive(Clone)]
pub struct NetworkChannel;

impl NetworkChannel {
    pub fn new() -> NetworkChannel { NetworkChannel }
}

impl FragmentChannel for NetworkChannel {
    fn get_json(&self, url: &Url, timeout: Option<f64>) -> Pin<Box<dyn Future<Output=Result<JsonValue,Error>>>> {
        let url = url.clone();
        Box::pin(async move {
            let mut ajax = PglAjax::new("GET",&url);
            if let Some(timeout) = timeout {
                ajax.set_timeout(timeout);
            }
            ajax.get_json().await
        })
    }
}
