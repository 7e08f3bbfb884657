use pagelet_toolkit::error::Error;
use pagelet_toolkit::{ pgl_ok, pgl_unwrap };
use pagelet_toolkit::url::Url;
use serde_json::Value as JsonValue;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys;
use web_sys::{ AbortController, Request, RequestInit, RequestMode, Response };

pub struct PglAjax {
    method: String,
    url: String,
    headers: Vec<(String,String)>,
    timeout: Option<f64>
}

impl PglAjax {
    pub fn new(method: &str, url: &Url) -> PglAjax {
        PglAjax {
            method: method.to_string(),
            url: url.to_string(),
            headers: vec![],
            timeout: None
        }
    }

    pub fn add_request_header(&mut self, key: &str, value: &str) {
        self.headers.push((key.to_string(),value.to_string()))
    }

    pub fn set_timeout(&mut self, timeout: f64) {
        self.timeout = Some(timeout);
    }

    fn add_abort(&self, init: &mut RequestInit, timeout: f64) -> Result<(),Error> {
        let controller = pgl_ok!(AbortController::new())?;
        let signal = controller.signal();
        init.signal(Some(&signal));
        let closure = Closure::once_into_js(Box::new(move || controller.abort()) as Box<dyn Fn()>);
        let window = pgl_unwrap!(web_sys::window())?;
        pgl_ok!(window.set_timeout_with_callback_and_timeout_and_arguments_0(&closure.into(),timeout as i32))?;
        Ok(())
    }

    async fn get(&self) -> Result<Response,Error> {
        let mut init = RequestInit::new();
        init.method(&self.method).mode(RequestMode::Cors);
        if let Some(timeout) = self.timeout {
            self.add_abort(&mut init,timeout)?;
        }
        let req = pgl_ok!(Request::new_with_str_and_init(&self.url,&init))?;
        for (k,v) in &self.headers {
            pgl_ok!(req.headers().set(k,v))?;
        }
        let window = pgl_unwrap!(web_sys::window())?;
        let response = Error::oper_r(
            JsFuture::from(window.fetch_with_request(&req)).await,
            "cannot send request"
        )?;
        let response : Response = pgl_ok!(response.dyn_into())?;
        if !response.ok() {
            return Err(Error::operr(&format!("unexpected status code: {}",response.status())));
        }
        Ok(response)
    }

    pub async fn get_json(&mut self) -> Result<JsonValue,Error> {
        self.add_request_header("Content-Type","application/json");
        let response = self.get().await?;
        let json = pgl_ok!(response.json())?;
        let json = Error::oper_r(JsFuture::from(json).await,"expected json body")?;
        let json : JsonValue = Error::oper_r(serde_wasm_bindgen::from_value(json),"expected json body")?;
        Ok(json)
    }
}
