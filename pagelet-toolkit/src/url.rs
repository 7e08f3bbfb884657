use std::fmt;

/* Deliberately lenient: a base is used exactly as the embedding page supplied
 * it, so the only thing rejected here is an empty string. Path joins are
 * plain concatenation against a base which is expected to end in a slash.
 */

#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub struct Url(String);

impl Url {
    pub fn parse(input: &str) -> Result<Url,String> {
        if input.is_empty() {
            return Err("empty url".to_string());
        }
        Ok(Url(input.to_string()))
    }

    pub fn join(&self, path: &str) -> Url {
        Url(format!("{}{}",self.0,path))
    }

    pub fn add_query_parameter(&self, key: &str, value: &str) -> Url {
        let separator = if self.0.contains('?') { "&" } else { "?" };
        Url(format!("{}{}{}={}",self.0,separator,key,value))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{}",self.0)
    }
}
