pub(crate) mod animcjk;
pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod ja;
pub(crate) mod loader;
pub(crate) mod markup;
pub(crate) mod static_source;
pub(crate) mod zh;
