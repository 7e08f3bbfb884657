use pagelet_toolkit::url::Url;

const ENDPOINT : &str = "rest/htmlpage-api/v1/htmlpage/";

/* Identifiers are opaque, server-controlled strings and land in the url
 * exactly as given.
 */

#[derive(Clone,Debug,PartialEq,Eq)]
pub struct FragmentReq {
    id: String,
    id_default: String
}

impl FragmentReq {
    pub fn new(id: &str, id_default: &str) -> FragmentReq {
        FragmentReq {
            id: id.to_string(),
            id_default: id_default.to_string()
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn id_default(&self) -> &str { &self.id_default }

    pub fn url(&self, base: &Url) -> Url {
        base.join(&format!("{}{}",ENDPOINT,self.id))
            .add_query_parameter("id_default",&self.id_default)
    }
}
