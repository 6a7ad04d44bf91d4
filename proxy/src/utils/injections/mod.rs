pub mod proxy_di;
