mod api {
    mod loader;

    pub use self::loader::{ LoadOptions, PageletAPI };
}

mod core {
    mod config;
    mod integration;

    pub use self::config::{ Config, ConfigError, ConfigKeyInfo, ConfigValue, PageletConfig, PageletConfigKey, PageletConfigValue };
    pub use self::integration::PageletIntegration;
}

mod request {
    mod channel;
    mod fragmentreq;
    mod fragmentres;

    pub use self::channel::FragmentChannel;
    pub use self::fragmentreq::FragmentReq;
    pub use self::fragmentres::{ FragmentRes, STATUS_OK };
}

pub use self::api::{ LoadOptions, PageletAPI };
pub use self::core::{ Config, ConfigError, ConfigKeyInfo, ConfigValue, PageletConfig, PageletConfigKey, PageletConfigValue, PageletIntegration };
pub use self::request::{ FragmentChannel, FragmentReq, FragmentRes, STATUS_OK };
