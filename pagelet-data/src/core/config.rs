use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub enum ConfigError {
    UnknownConfigKey(String),
    UninitialisedKey(String),
    BadConfigValue(String,String),
}

pub trait ConfigValue : Sized {
    /* parse in the shape of the default supplied for this key */
    fn parse(&self, value_str: &str) -> Result<Self,String>;
}

pub struct ConfigKeyInfo<K,V> {
    pub key: K,
    pub name: &'static str,
    pub default: V
}

pub struct Config<K,V> where K: PartialEq+Eq+Hash, V: ConfigValue + Clone {
    str_to_key: HashMap<String,K>,
    defaults: HashMap<K,V>,
    values: HashMap<K,V>
}

impl<K: Debug+Clone+PartialEq+Eq+Hash, V: ConfigValue+Clone> Config<K,V> {
    pub fn new(info: Vec<ConfigKeyInfo<K,V>>) -> Config<K,V> {
        let mut str_to_key = HashMap::new();
        let mut defaults = HashMap::new();
        for info in info {
            str_to_key.insert(info.name.to_string(),info.key.clone());
            defaults.insert(info.key,info.default);
        }
        Config {
            str_to_key,
            defaults,
            values: HashMap::new()
        }
    }

    /* unknown keys are deliberately let through: embedders send their whole
     * config object and we take the keys which are ours */
    pub fn set(&mut self, key_str: &str, value_str: &str) -> Result<(),ConfigError> {
        if let Some(key) = self.str_to_key.get(key_str) {
            let default = self.defaults.get(key).ok_or_else(|| {
                ConfigError::UninitialisedKey(key_str.to_string())
            })?;
            let value = default.parse(value_str).map_err(|e| {
                ConfigError::BadConfigValue(key_str.to_string(),e)
            })?;
            self.values.insert(key.clone(),value);
        }
        Ok(())
    }

    pub fn try_get(&self, key: &K) -> Option<&V> {
        if let Some(v) = self.values.get(key) { return Some(v); }
        if let Some(v) = self.defaults.get(key) { return Some(v); }
        None
    }

    pub fn get(&self, key: &K) -> Result<&V,ConfigError> {
        if let Some(v) = self.try_get(key) { return Ok(v); }
        Err(ConfigError::UninitialisedKey(format!("{:?}",key)))
    }
}

#[derive(Clone,Debug,PartialEq,Eq,Hash)]
pub enum PageletConfigKey {
    DecorationClass,
    RequestTimeout
}

#[derive(Clone,Debug,PartialEq)]
pub enum PageletConfigValue {
    String(String),
    OptFloat(Option<f64>)
}

impl ConfigValue for PageletConfigValue {
    fn parse(&self, value_str: &str) -> Result<PageletConfigValue,String> {
        match self {
            PageletConfigValue::String(_) => {
                Ok(PageletConfigValue::String(value_str.to_string()))
            },
            PageletConfigValue::OptFloat(_) => {
                if value_str.is_empty() {
                    return Ok(PageletConfigValue::OptFloat(None));
                }
                value_str.parse::<f64>()
                    .map(|v| PageletConfigValue::OptFloat(Some(v)))
                    .map_err(|e| e.to_string())
            }
        }
    }
}

pub struct PageletConfig(Config<PageletConfigKey,PageletConfigValue>);

impl PageletConfig {
    pub fn new() -> PageletConfig {
        PageletConfig(Config::new(vec![
            ConfigKeyInfo {
                key: PageletConfigKey::DecorationClass,
                name: "decoration_class",
                default: PageletConfigValue::String("htmlpage".to_string())
            },
            ConfigKeyInfo {
                key: PageletConfigKey::RequestTimeout,
                name: "request_timeout",
                default: PageletConfigValue::OptFloat(None)
            }
        ]))
    }

    pub fn set(&mut self, key_str: &str, value_str: &str) -> Result<(),ConfigError> {
        self.0.set(key_str,value_str)
    }

    pub fn decoration_class(&self) -> Result<String,ConfigError> {
        match self.0.get(&PageletConfigKey::DecorationClass)? {
            PageletConfigValue::String(v) => Ok(v.to_string()),
            _ => Err(ConfigError::BadConfigValue("decoration_class".to_string(),"expected string".to_string()))
        }
    }

    pub fn request_timeout(&self) -> Result<Option<f64>,ConfigError> {
        match self.0.get(&PageletConfigKey::RequestTimeout)? {
            PageletConfigValue::OptFloat(v) => Ok(v.clone()),
            _ => Err(ConfigError::BadConfigValue("request_timeout".to_string(),"expected milliseconds".to_string()))
        }
    }
}
