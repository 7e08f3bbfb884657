use std::fmt::Debug;
use std::sync::{ Arc, Mutex };
use js_sys::{ Function, Reflect };
use pagelet_data::{ FragmentReq, LoadOptions, PageletAPI, PageletConfig };
use pagelet_network::NetworkChannel;
use pagelet_toolkit::console::{ set_verbosity, Verbosity };
use pagelet_toolkit::error::Error;
use pagelet_toolkit::{ error, lock };
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod dom;
mod pglconsole;

use crate::dom::{ page_base_url, DomIntegration };
use crate::pglconsole::setup_console;

thread_local!{
    pub static CLOSURE : Arc<Mutex<Vec<Option<Function>>>> = Arc::new(Mutex::new(vec![]));
}

/*
 * This utility just catches serious errors in setting the loader up. It's not
 * the main error-handling code: load failures go through the reporter.
 */
fn js_throw<T,E: Debug>(e: Result<T,E>) -> T {
    match e {
        Ok(e) => e,
        Err(e) => {
            error!("{:?}",e);
            panic!("deliberate panic from js_throw following error. Ignore this trace, see error above.");
        }
    }
}

fn jserror<T>(e: Result<T,JsValue>) -> Result<T,Error> {
    e.map_err(|e| Error::operr(&format!("javascript error: {:?}",e)))
}

fn config_value(input: &JsValue) -> Result<String,Error> {
    if let Some(value) = input.as_string() { return Ok(value); }
    if let Some(value) = input.as_f64() { return Ok(value.to_string()); }
    Err(Error::operr(&format!("bad config value {:?}",input)))
}

#[wasm_bindgen]
#[derive(Clone)]
pub struct HtmlPageLoader {
    api: PageletAPI,
    closure_index: Option<usize>
}

#[wasm_bindgen]
impl HtmlPageLoader {
    /*
     * Recognised config keys: base_url (defaults to the page's declared base
     * reference), decoration_class, request_timeout, verbosity. Anything else
     * in the object is left for the embedder.
     */
    #[wasm_bindgen(constructor)]
    pub fn new(config_object: &JsValue) -> HtmlPageLoader {
        js_throw(Self::new_real(config_object))
    }

    fn new_real(config_object: &JsValue) -> Result<HtmlPageLoader,Error> {
        setup_console(10,30.);
        let mut config = PageletConfig::new();
        let mut base_url = None;
        if !config_object.is_undefined() && !config_object.is_null() {
            for key in jserror(Reflect::own_keys(config_object))?.iter() {
                let value = jserror(Reflect::get(config_object,&key))?;
                let key = key.as_string().ok_or_else(|| Error::operr("bad config key"))?;
                let value = config_value(&value)?;
                match key.as_str() {
                    "base_url" => { base_url = Some(value); },
                    "verbosity" => { set_verbosity(&Verbosity::from_string(&value)); },
                    _ => { Error::oper_r(config.set(&key,&value),"bad config")?; }
                }
            }
        }
        let api = PageletAPI::new(
            Arc::new(NetworkChannel::new()),
            Arc::new(DomIntegration::new()),
            config
        );
        if let Some(base) = base_url.or_else(|| page_base_url()) {
            api.set_base_url(&base);
        }
        Ok(HtmlPageLoader { api, closure_index: None })
    }

    fn fire(&self, req: FragmentReq, options: LoadOptions) {
        let api = self.api.clone();
        spawn_local(async move {
            if let Err(e) = api.load(&req,&options).await {
                api.report(&e);
            }
        });
    }

    pub fn set_base_url(&self, base_url: &str) {
        self.api.set_base_url(base_url);
    }

    pub fn load(&self, id: &str, id_default: &str, id_div: &str) {
        self.fire(FragmentReq::new(id,id_default),LoadOptions::new(id_div));
    }

    pub fn load_decorated(&self, id: &str, id_default: &str, id_div: &str) {
        self.fire(FragmentReq::new(id,id_default),LoadOptions::decorated(id_div));
    }

    pub fn bind(&self, id: &str, id_default: &str, id_div: &str) {
        self.api.bind(FragmentReq::new(id,id_default),LoadOptions::new(id_div));
    }

    pub fn bind_decorated(&self, id: &str, id_default: &str, id_div: &str) {
        self.api.bind(FragmentReq::new(id,id_default),LoadOptions::decorated(id_div));
    }

    pub fn refresh(&self) {
        let api = self.api.clone();
        spawn_local(async move {
            if let Err(e) = api.refresh().await {
                api.report(&e);
            }
        });
    }

    /* called first time set_message_reporter is called for each object */
    fn first_set_message_reporter(&mut self, closure: &Arc<Mutex<Vec<Option<Function>>>>) {
        let mut closure = lock!(closure);
        let index = closure.len();
        closure.push(None);
        self.closure_index = Some(index);
        self.api.set_message_reporter(Box::new(move |e| {
            let message = e.message.to_string();
            CLOSURE.with(|closure| {
                if let Some(closure) = &lock!(closure)[index] {
                    let this = JsValue::null();
                    /* func("error",message_as_string) */
                    let kind = JsValue::from("error");
                    let msg = JsValue::from(message.as_str());
                    let _ = closure.call2(&this,&kind,&msg);
                }
            });
        }));
    }

    pub fn set_message_reporter(&mut self, f: Function) {
        CLOSURE.with(move |closure| {
            if self.closure_index.is_none() {
                self.first_set_message_reporter(closure);
            }
            if let Some(index) = self.closure_index {
                lock!(closure)[index].replace(f);
            }
        });
    }
}

/*
 * This is the code which starts it all.
 */
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    Ok(())
}

/*
 * This is an obscure thing which makes stack traces better.
 */
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(not(debug_assertions))]
    use std::panic;

    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    #[cfg(not(debug_assertions))]
    panic::set_hook(Box::new(|_| {}));
}
