use std::sync::{ Arc, Mutex };
use pagelet_toolkit::error::Error;
use pagelet_toolkit::lock;
use pagelet_toolkit::log_extra;
use pagelet_toolkit::url::Url;
use crate::core::{ PageletConfig, PageletIntegration };
use crate::request::{ FragmentChannel, FragmentReq, FragmentRes };

#[derive(Clone,Debug,PartialEq,Eq)]
pub struct LoadOptions {
    pub target: String,
    pub decorate: bool
}

impl LoadOptions {
    pub fn new(target: &str) -> LoadOptions {
        LoadOptions { target: target.to_string(), decorate: false }
    }

    pub fn decorated(target: &str) -> LoadOptions {
        LoadOptions { target: target.to_string(), decorate: true }
    }
}

struct LoaderState {
    base: Option<Url>,
    bound: Option<(FragmentReq,LoadOptions)>,
    reporter: Option<Box<dyn FnMut(&Error)>>
}

/* One loader per embedding. Everything mutable sits behind the one state
 * lock so clones handed to spawned loads all see the same base url and
 * binding.
 */
#[derive(Clone)]
pub struct PageletAPI {
    channel: Arc<dyn FragmentChannel>,
    integration: Arc<dyn PageletIntegration>,
    config: Arc<PageletConfig>,
    state: Arc<Mutex<LoaderState>>
}

impl PageletAPI {
    pub fn new(channel: Arc<dyn FragmentChannel>, integration: Arc<dyn PageletIntegration>, config: PageletConfig) -> PageletAPI {
        PageletAPI {
            channel,
            integration,
            config: Arc::new(config),
            state: Arc::new(Mutex::new(LoaderState {
                base: None,
                bound: None,
                reporter: None
            }))
        }
    }

    /* An empty string leaves the existing base in place. */
    pub fn set_base_url(&self, base_url: &str) {
        if let Ok(base_url) = Url::parse(base_url) {
            lock!(self.state).base = Some(base_url);
        }
    }

    pub fn base_url(&self) -> Option<Url> {
        lock!(self.state).base.clone()
    }

    pub fn set_message_reporter(&self, reporter: Box<dyn FnMut(&Error)>) {
        lock!(self.state).reporter = Some(reporter);
    }

    pub fn report(&self, e: &Error) {
        if let Some(reporter) = lock!(self.state).reporter.as_mut() {
            reporter(e);
        }
        e.web_deadend();
    }

    pub fn bind(&self, req: FragmentReq, options: LoadOptions) {
        lock!(self.state).bound = Some((req,options));
    }

    pub async fn refresh(&self) -> Result<(),Error> {
        let bound = lock!(self.state).bound.clone();
        let (req,options) = bound.ok_or_else(|| Error::nosuch("refresh before bind"))?;
        self.load(&req,&options).await
    }

    pub async fn load(&self, req: &FragmentReq, options: &LoadOptions) -> Result<(),Error> {
        let base = lock!(self.state).base.clone();
        let base = base.ok_or_else(|| Error::nosuch("no base url configured"))?;
        let url = req.url(&base);
        let timeout = self.config.request_timeout()
            .map_err(|e| Error::operr(&format!("broken config: {:?}",e)))?;
        log_extra!("loading fragment {}",url);
        let value = self.channel.get_json(&url,timeout).await?;
        match FragmentRes::decode(value) {
            FragmentRes::Found(html) => {
                if options.decorate {
                    let class = self.config.decoration_class()
                        .map_err(|e| Error::operr(&format!("broken config: {:?}",e)))?;
                    self.integration.decorate(&options.target,&class)?;
                }
                self.integration.write_fragment(&options.target,&html)
            },
            FragmentRes::Rejected(reason) => {
                Err(Error::operr(&format!("fragment '{}' refused: {}",req.id(),reason)))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::future::Future;
    use std::pin::Pin;
    use futures::executor::block_on;
    use pagelet_toolkit::error::ErrorType;
    use serde_json::{ json, Value as JsonValue };
    use super::*;

    struct TestChannel {
        responses: Arc<Mutex<Vec<Result<JsonValue,Error>>>>,
        requests: Arc<Mutex<Vec<(String,Option<f64>)>>>
    }

    impl FragmentChannel for TestChannel {
        fn get_json(&self, url: &Url, timeout: Option<f64>) -> Pin<Box<dyn Future<Output=Result<JsonValue,Error>>>> {
            self.requests.lock().unwrap().push((url.to_string(),timeout));
            let mut responses = self.responses.lock().unwrap();
            let response = if responses.is_empty() {
                Err(Error::operr("no canned response"))
            } else {
                responses.remove(0)
            };
            Box::pin(async move { response })
        }
    }

    #[derive(Clone)]
    struct TestIntegration {
        events: Arc<Mutex<Vec<(&'static str,String,String)>>>
    }

    impl TestIntegration {
        fn new() -> TestIntegration {
            TestIntegration { events: Arc::new(Mutex::new(vec![])) }
        }

        fn events(&self) -> Vec<(&'static str,String,String)> {
            self.events.lock().unwrap().to_vec()
        }

        fn writes(&self) -> Vec<(String,String)> {
            self.events().iter().filter(|e| e.0 == "write")
                .map(|e| (e.1.to_string(),e.2.to_string())).collect()
        }

        fn decorations(&self) -> Vec<(String,String)> {
            self.events().iter().filter(|e| e.0 == "decorate")
                .map(|e| (e.1.to_string(),e.2.to_string())).collect()
        }
    }

    impl PageletIntegration for TestIntegration {
        fn write_fragment(&self, target: &str, html: &str) -> Result<(),Error> {
            self.events.lock().unwrap().push(("write",target.to_string(),html.to_string()));
            Ok(())
        }

        fn decorate(&self, target: &str, class: &str) -> Result<(),Error> {
            self.events.lock().unwrap().push(("decorate",target.to_string(),class.to_string()));
            Ok(())
        }
    }

    fn make_api(config: PageletConfig, responses: Vec<Result<JsonValue,Error>>)
            -> (PageletAPI,TestIntegration,Arc<Mutex<Vec<(String,Option<f64>)>>>) {
        let requests = Arc::new(Mutex::new(vec![]));
        let channel = TestChannel {
            responses: Arc::new(Mutex::new(responses)),
            requests: requests.clone()
        };
        let integration = TestIntegration::new();
        let api = PageletAPI::new(Arc::new(channel),Arc::new(integration.clone()),config);
        (api,integration,requests)
    }

    fn ok_envelope() -> Result<JsonValue,Error> {
        Ok(json!({ "status": "OK", "result": "<p>hi</p>" }))
    }

    #[test]
    fn end_to_end_success() {
        let (api,integration,requests) = make_api(PageletConfig::new(),vec![ok_envelope()]);
        api.set_base_url("http://host/app/");
        block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel"))).ok().unwrap();
        assert_eq!("http://host/app/rest/htmlpage-api/v1/htmlpage/42?id_default=0",
                   requests.lock().unwrap()[0].0);
        assert_eq!(vec![("panel".to_string(),"<p>hi</p>".to_string())],integration.writes());
        assert!(integration.decorations().is_empty());
    }

    #[test]
    fn rejected_status_leaves_target_alone() {
        let (api,integration,_) = make_api(PageletConfig::new(),vec![
            Ok(json!({ "status": "KO", "result": "<p>hi</p>" }))
        ]);
        api.set_base_url("http://host/app/");
        let out = block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel")));
        assert!(out.is_err());
        assert!(integration.events().is_empty());
    }

    #[test]
    fn malformed_envelope_leaves_target_alone() {
        let (api,integration,_) = make_api(PageletConfig::new(),vec![Ok(json!(["surprise"]))]);
        api.set_base_url("http://host/app/");
        let out = block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel")));
        assert!(out.is_err());
        assert!(integration.events().is_empty());
    }

    #[test]
    fn transport_failure_leaves_target_alone() {
        let (api,integration,_) = make_api(PageletConfig::new(),vec![
            Err(Error::operr("unexpected status code: 500"))
        ]);
        api.set_base_url("http://host/app/");
        let out = block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel")));
        assert!(out.is_err());
        assert!(integration.events().is_empty());
    }

    #[test]
    fn empty_base_url_is_ignored() {
        let (api,_,requests) = make_api(PageletConfig::new(),vec![ok_envelope()]);
        api.set_base_url("http://host/app/");
        api.set_base_url("");
        block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel"))).ok().unwrap();
        assert!(requests.lock().unwrap()[0].0.starts_with("http://host/app/"));
    }

    #[test]
    fn replacing_base_url_changes_next_request() {
        let (api,_,requests) = make_api(PageletConfig::new(),vec![ok_envelope(),ok_envelope()]);
        api.set_base_url("http://host/app/");
        block_on(api.load(&FragmentReq::new("1","0"),&LoadOptions::new("panel"))).ok().unwrap();
        api.set_base_url("http://other/");
        block_on(api.load(&FragmentReq::new("1","0"),&LoadOptions::new("panel"))).ok().unwrap();
        let requests = requests.lock().unwrap();
        assert!(requests[0].0.starts_with("http://host/app/"));
        assert!(requests[1].0.starts_with("http://other/"));
    }

    #[test]
    fn unseeded_base_url_makes_no_request() {
        let (api,integration,requests) = make_api(PageletConfig::new(),vec![ok_envelope()]);
        let out = block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel")));
        match out {
            Err(e) => { assert!(matches!(e.error_type,ErrorType::NoSuch)); },
            Ok(_) => { panic!("expected failure"); }
        }
        assert!(requests.lock().unwrap().is_empty());
        assert!(integration.events().is_empty());
    }

    #[test]
    fn decoration_applied_before_content() {
        let (api,integration,_) = make_api(PageletConfig::new(),vec![ok_envelope()]);
        api.set_base_url("http://host/app/");
        block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::decorated("panel"))).ok().unwrap();
        let events = integration.events();
        assert_eq!(2,events.len());
        assert_eq!(("decorate","panel".to_string(),"htmlpage".to_string()),events[0]);
        assert_eq!(("write","panel".to_string(),"<p>hi</p>".to_string()),events[1]);
    }

    #[test]
    fn decoration_class_is_configurable() {
        let mut config = PageletConfig::new();
        config.set("decoration_class","boxed").ok().unwrap();
        let (api,integration,_) = make_api(config,vec![ok_envelope()]);
        api.set_base_url("http://host/app/");
        block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::decorated("panel"))).ok().unwrap();
        assert_eq!(vec![("panel".to_string(),"boxed".to_string())],integration.decorations());
    }

    #[test]
    fn timeout_reaches_channel() {
        let mut config = PageletConfig::new();
        config.set("request_timeout","5000").ok().unwrap();
        let (api,_,requests) = make_api(config,vec![ok_envelope()]);
        api.set_base_url("http://host/app/");
        block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel"))).ok().unwrap();
        assert_eq!(Some(5000.),requests.lock().unwrap()[0].1);
    }

    #[test]
    fn bound_refresh_matches_direct_load() {
        let (api,integration,requests) = make_api(PageletConfig::new(),vec![ok_envelope(),ok_envelope()]);
        api.set_base_url("http://host/app/");
        block_on(api.load(&FragmentReq::new("42","0"),&LoadOptions::new("panel"))).ok().unwrap();
        api.bind(FragmentReq::new("42","0"),LoadOptions::new("panel"));
        block_on(api.refresh()).ok().unwrap();
        let requests = requests.lock().unwrap();
        assert_eq!(requests[0],requests[1]);
        assert_eq!(integration.writes()[0],integration.writes()[1]);
    }

    #[test]
    fn rebinding_overwrites() {
        let (api,_,requests) = make_api(PageletConfig::new(),vec![ok_envelope()]);
        api.set_base_url("http://host/app/");
        api.bind(FragmentReq::new("1","0"),LoadOptions::new("panel"));
        api.bind(FragmentReq::new("2","9"),LoadOptions::new("sidebar"));
        block_on(api.refresh()).ok().unwrap();
        assert_eq!("http://host/app/rest/htmlpage-api/v1/htmlpage/2?id_default=9",
                   requests.lock().unwrap()[0].0);
    }

    #[test]
    fn refresh_before_bind_reports_and_does_nothing() {
        let (api,integration,requests) = make_api(PageletConfig::new(),vec![ok_envelope()]);
        api.set_base_url("http://host/app/");
        let out = block_on(api.refresh());
        match out {
            Err(e) => { assert!(matches!(e.error_type,ErrorType::NoSuch)); },
            Ok(_) => { panic!("expected failure"); }
        }
        assert!(requests.lock().unwrap().is_empty());
        assert!(integration.events().is_empty());
    }

    #[test]
    fn reporter_observes_failures() {
        let (api,_,_) = make_api(PageletConfig::new(),vec![]);
        let seen = Arc::new(Mutex::new(vec![]));
        let seen2 = seen.clone();
        api.set_message_reporter(Box::new(move |e| {
            seen2.lock().unwrap().push(e.message.to_string());
        }));
        api.report(&Error::operr("it went wrong"));
        assert_eq!(vec!["it went wrong".to_string()],*seen.lock().unwrap());
    }

    #[test]
    fn report_without_reporter_is_silent() {
        let (api,_,_) = make_api(PageletConfig::new(),vec![]);
        api.report(&Error::operr("nobody listening"));
    }
}
