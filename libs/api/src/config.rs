use std::collections::HashMap;

use anyhow::Context as _;
use router::View;
use strum::IntoEnumIterator as _;
use toml::{map::Map, Value};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub page_size: usize,
    pub allowed_origins: Vec<String>,
    pub pages: HashMap<View, StaticPage>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StaticPage {
    pub title: String,
    pub body: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            page_size: DEFAULT_PAGE_SIZE,
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
            pages: HashMap::new(),
        }
    }
}

impl Config {
    /// Missing keys fall back to defaults, keys of the wrong type are errors.
    pub fn from_toml(config: &Map<String, Value>) -> anyhow::Result<Self> {
        let mut result = Config::default();

        if let Some(port) = lookup(config, "server", "port") {
            let port = port
                .as_integer()
                .context("failed to parse server.port config")?;
            result.port = u16::try_from(port)
                .context("server.port config is out of range")?;
        }

        if let Some(page_size) = lookup(config, "site", "page_size") {
            let page_size = page_size
                .as_integer()
                .context("failed to parse site.page_size config")?;
            result.page_size = usize::try_from(page_size)
                .ok()
                .filter(|size| *size > 0)
                .context("site.page_size config must be positive")?;
        }

        if let Some(origins) = lookup(config, "site", "allowed_origins") {
            result.allowed_origins = origins
                .as_array()
                .context("failed to parse site.allowed_origins config")?
                .iter()
                .map(|origin| {
                    origin
                        .as_str()
                        .map(str::to_string)
                        .context("site.allowed_origins must hold strings")
                })
                .collect::<anyhow::Result<_>>()?;
        }

        for view in View::iter() {
            let Some(key) = view.page_key() else {
                continue;
            };
            let Some(page) = lookup(config, "pages", key) else {
                continue;
            };
            result.pages.insert(view, parse_page(key, page)?);
        }

        Ok(result)
    }
}

fn lookup<'a>(
    config: &'a Map<String, Value>,
    table: &str,
    key: &str,
) -> Option<&'a Value> {
    config.get(table)?.get(key)
}

fn parse_page(key: &str, page: &Value) -> anyhow::Result<StaticPage> {
    let field = |name: &str| {
        page.get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .with_context(|| format!("failed to load pages.{key}.{name} config"))
    };

    Ok(StaticPage {
        title: field("title")?,
        body: field("body")?,
    })
}
