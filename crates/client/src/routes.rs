// Console route table
//
// Static mapping from console URL paths to view components and their page
// metadata, with a resolver that matches concrete paths against it.

use serde::Serialize;

/// Maximum number of redirects followed by [`resolve`]
const MAX_REDIRECTS: usize = 8;

/// Functional area a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteModule {
    Agent,
    Config,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub title: &'static str,
    pub module: RouteModule,
}

/// What a route leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "target")]
pub enum RouteTarget {
    Redirect(&'static str),
    /// View component, loaded on first navigation
    View(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Pattern; `:name` captures one segment, `:name(.*)*` captures the rest
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    pub meta: Option<RouteMeta>,
}

const fn view(
    path: &'static str,
    name: &'static str,
    title: &'static str,
    module: RouteModule,
) -> Route {
    Route {
        path,
        name: Some(name),
        target: RouteTarget::View(name),
        meta: Some(RouteMeta { title, module }),
    }
}

/// Console routes, in match order
pub static ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: None,
        target: RouteTarget::Redirect("/agents"),
        meta: None,
    },
    view("/agents", "AgentList", "智能体列表", RouteModule::Agent),
    view("/agent/create", "AgentCreate", "创建智能体", RouteModule::Agent),
    view("/agent/:id", "AgentDetail", "智能体详情", RouteModule::Agent),
    view("/agent/:id/run", "AgentRun", "运行智能体", RouteModule::Agent),
    view("/model-config", "ModelConfig", "模型配置", RouteModule::Config),
    view("/:pathMatch(.*)*", "NotFound", "页面未找到", RouteModule::Error),
];

/// A route matched against a concrete path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub route: &'static Route,
    /// Path that was finally matched, after redirects
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Look up a route by name
pub fn find_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == Some(name))
}

/// Resolve a console path to the view it renders
///
/// Query string and fragment are ignored. Redirects are followed; the
/// catch-all route guarantees a match for any path.
pub fn resolve(path: &str) -> RouteMatch {
    let mut current = strip_query(path).to_string();

    for _ in 0..MAX_REDIRECTS {
        let (route, params) = match_route(&current);
        match route.target {
            RouteTarget::Redirect(target) => current = target.to_string(),
            RouteTarget::View(_) => {
                return RouteMatch {
                    route,
                    path: current,
                    params,
                }
            }
        }
    }

    let (route, params) = match_route(&current);
    RouteMatch {
        route,
        path: current,
        params,
    }
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_route(path: &str) -> (&'static Route, Vec<(String, String)>) {
    let path_segments = segments(path);
    for route in ROUTES {
        if let Some(params) = match_pattern(route.path, &path_segments) {
            return (route, params);
        }
    }
    // The table ends with a catch-all
    let fallback = &ROUTES[ROUTES.len() - 1];
    (
        fallback,
        vec![("pathMatch".to_string(), path_segments.join("/"))],
    )
}

fn match_pattern(pattern: &str, path: &[&str]) -> Option<Vec<(String, String)>> {
    let pattern_segments = segments(pattern);
    let mut params = Vec::new();

    for (index, part) in pattern_segments.iter().enumerate() {
        if let Some(name) = part.strip_prefix(':') {
            if let Some(rest_name) = name.strip_suffix("(.*)*") {
                params.push((rest_name.to_string(), path[index.min(path.len())..].join("/")));
                return Some(params);
            }
            let value = path.get(index)?;
            params.push((name.to_string(), (*value).to_string()));
        } else if path.get(index) != Some(part) {
            return None;
        }
    }

    if pattern_segments.len() == path.len() {
        Some(params)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_agent_list() {
        let matched = resolve("/");
        assert_eq!(matched.route.name, Some("AgentList"));
        assert_eq!(matched.path, "/agents");
    }

    #[test]
    fn test_static_segment_wins_over_param() {
        let matched = resolve("/agent/create");
        assert_eq!(matched.route.name, Some("AgentCreate"));
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_param_extraction() {
        let matched = resolve("/agent/42/run?tab=chat");
        assert_eq!(matched.route.name, Some("AgentRun"));
        assert_eq!(matched.param("id"), Some("42"));

        let detail = resolve("/agent/42/");
        assert_eq!(detail.route.name, Some("AgentDetail"));
    }

    #[test]
    fn test_unknown_path_hits_catch_all() {
        let matched = resolve("/no/such/page");
        assert_eq!(matched.route.name, Some("NotFound"));
        assert_eq!(matched.param("pathMatch"), Some("no/such/page"));
        assert_eq!(matched.route.meta.unwrap().module, RouteModule::Error);
    }

    #[test]
    fn test_find_by_name() {
        let route = find_by_name("ModelConfig").unwrap();
        assert_eq!(route.path, "/model-config");
        assert_eq!(route.meta.unwrap().title, "模型配置");
        assert!(find_by_name("Missing").is_none());
    }
}
