//! Locale-prefixed page routes
//!
//! `/{locale}/connector-guide`, `/{locale}/terminals`,
//! `/{locale}/installation` and `/{locale}/connector/{id}`.

use std::fmt;
use std::str::FromStr;

use crate::i18n;
use crate::{GuideError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    ConnectorGuide,
    Terminals,
    Installation,
    ConnectorDetail(i64),
}

impl Page {
    /// Localization key of the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::ConnectorGuide => "pages.connector-guide",
            Page::Terminals => "pages.terminals",
            Page::Installation => "pages.installation",
            Page::ConnectorDetail(_) => "detail.model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub locale: String,
    pub page: Page,
}

impl Route {
    pub fn new(locale: impl Into<String>, page: Page) -> Self {
        Self {
            locale: locale.into(),
            page,
        }
    }

    pub fn connector(locale: impl Into<String>, id: i64) -> Self {
        Self::new(locale, Page::ConnectorDetail(id))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Page::ConnectorGuide => write!(f, "/{}/connector-guide", self.locale),
            Page::Terminals => write!(f, "/{}/terminals", self.locale),
            Page::Installation => write!(f, "/{}/installation", self.locale),
            Page::ConnectorDetail(id) => write!(f, "/{}/connector/{}", self.locale, id),
        }
    }
}

impl FromStr for Route {
    type Err = GuideError;

    fn from_str(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let (locale, rest) = segments
            .split_first()
            .ok_or_else(|| GuideError::Route(format!("Empty route: '{path}'")))?;

        if !i18n::is_supported(locale) {
            return Err(GuideError::Route(format!(
                "Unsupported locale '{locale}' in route '{path}'"
            )));
        }

        let page = match rest {
            ["connector-guide"] => Page::ConnectorGuide,
            ["terminals"] => Page::Terminals,
            ["installation"] => Page::Installation,
            ["connector", id] => {
                let id = id.parse::<i64>().map_err(|_| {
                    GuideError::Route(format!("Invalid connector id '{id}' in route '{path}'"))
                })?;
                Page::ConnectorDetail(id)
            }
            _ => return Err(GuideError::Route(format!("Unknown page in route '{path}'"))),
        };

        Ok(Route::new(*locale, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_route() {
        let route: Route = "/de/connector/42".parse().unwrap();
        assert_eq!(route, Route::connector("de", 42));
        assert_eq!(route.to_string(), "/de/connector/42");
    }

    #[test]
    fn test_parse_static_pages() {
        for (path, page) in [
            ("/en/connector-guide", Page::ConnectorGuide),
            ("/en/terminals/", Page::Terminals),
            ("en/installation", Page::Installation),
        ] {
            let route: Route = path.parse().unwrap();
            assert_eq!(route.page, page);
        }
    }

    #[test]
    fn test_rejects_unknown_locale_and_page() {
        assert!("/fr/terminals".parse::<Route>().is_err());
        assert!("/en/admin".parse::<Route>().is_err());
        assert!("/en/connector/abc".parse::<Route>().is_err());
        assert!("/".parse::<Route>().is_err());
    }
}
