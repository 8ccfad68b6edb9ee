/// Path of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
}

/// `POST`, signup form.
pub const SUBSCRIBERS: Route = Route {
    path: "/api/subscribers",
};

/// `GET`, readiness probe.
pub const HEALTH: Route = Route {
    path: "/api/health",
};

impl Route {
    /// Joins the route path onto a base url, tolerating a trailing slash on the base.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}
