mod view;

pub use view::View;

/// One entry of the route table. `:name` segments capture a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub view: View,
    pub params: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

const TABLE: &[Route] = &[
    Route {
        pattern: "/",
        view: View::PostList,
        params: &[],
    },
    Route {
        pattern: "/post/:id",
        view: View::PostDetail,
        params: &["id"],
    },
    Route {
        pattern: "/about",
        view: View::About,
        params: &[],
    },
    Route {
        pattern: "/contact",
        view: View::Contact,
        params: &[],
    },
    Route {
        pattern: "/pricing",
        view: View::Pricing,
        params: &[],
    },
    Route {
        pattern: "/profile",
        view: View::Profile,
        params: &[],
    },
];

pub static ROUTES: RouteTable = RouteTable::new(TABLE);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("no route leads to view {0}")]
    NoRoute(View),

    #[error("view {view} needs parameter '{param}'")]
    MissingParam { view: View, param: &'static str },
}

/// Outcome of matching a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub view: View,
    pub params: Params,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RouteTable {
    pub const fn new(routes: &'static [Route]) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> impl Iterator<Item = &'static Route> {
        self.routes.iter()
    }

    /// First matching route wins; anything else is `View::NotFound`.
    pub fn resolve(&self, path: &str) -> Resolved {
        self.routes
            .iter()
            .find_map(|route| {
                match_pattern(route.pattern, path).map(|params| Resolved {
                    view: route.view,
                    params,
                })
            })
            .unwrap_or(Resolved {
                view: View::NotFound,
                params: Params::default(),
            })
    }

    /// Builds the path leading to `view`.
    pub fn href(
        &self,
        view: View,
        params: &[(&str, &str)],
    ) -> Result<String, RouterError> {
        let route = self
            .routes
            .iter()
            .find(|route| route.view == view)
            .ok_or(RouterError::NoRoute(view))?;

        let mut path = String::new();
        for segment in segments(route.pattern).unwrap_or_default() {
            if segment.is_empty() {
                continue;
            }
            path.push('/');
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or(RouterError::MissingParam {
                            view,
                            param: route_param(route, name),
                        })?;
                    path.push_str(value);
                }
                None => path.push_str(segment),
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

fn route_param(route: &Route, name: &str) -> &'static str {
    route
        .params
        .iter()
        .copied()
        .find(|param| *param == name)
        .unwrap_or("?")
}

/// `/a/b/` -> `["a", "b"]`, `/` -> `[""]`. Paths must be absolute and
/// must not start with an empty segment (`//`).
fn segments(path: &str) -> Option<Vec<&str>> {
    let path = path.strip_prefix('/')?;
    if path.starts_with('/') {
        return None;
    }
    let path = path.strip_suffix('/').unwrap_or(path);
    Some(path.split('/').collect())
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Params> {
    let expected = segments(pattern)?;
    let actual = segments(path)?;
    if expected.len() != actual.len() {
        return None;
    }

    let mut params = vec![];
    for (want, got) in expected.into_iter().zip(actual) {
        match want.strip_prefix(':') {
            Some(name) if !got.is_empty() => {
                params.push((name, got.to_string()))
            }
            Some(_) => return None,
            None if want == got => {}
            None => return None,
        }
    }

    Some(Params(params))
}
