use ntex::http::{header, Method};
use ntex::service::{Middleware, Service, ServiceCtx};
use ntex::web;
use spdlog::info;

use crate::server::ErrorBody;
use crate::session::SessionKeys;

#[derive(Debug, PartialEq)]
pub enum GateDecision {
    Allow,
    RequireSession,
}

/// The per-request authorization rule, in evaluation order: anything
/// outside the API surface passes, reads pass, the auth subsystem passes,
/// every other request needs a valid session token.
pub fn route_policy(method: &Method, path: &str) -> GateDecision {
    if !path.starts_with("/api") {
        return GateDecision::Allow;
    }
    if method == Method::GET {
        return GateDecision::Allow;
    }
    if path.starts_with("/api/auth") {
        return GateDecision::Allow;
    }
    GateDecision::RequireSession
}

/// Middleware applying [route_policy] to every request. A missing token
/// and a failed verification produce the same 401 body on purpose.
#[derive(Clone)]
pub struct SessionGate {
    keys: SessionKeys,
}

impl SessionGate {
    pub fn new(keys: SessionKeys) -> SessionGate {
        SessionGate { keys }
    }
}

impl<S> Middleware<S> for SessionGate {
    type Service = SessionGateService<S>;

    fn create(&self, service: S) -> Self::Service {
        SessionGateService {
            service,
            keys: self.keys.clone(),
        }
    }
}

pub struct SessionGateService<S> {
    service: S,
    keys: SessionKeys,
}

impl<S, Err> Service<web::WebRequest<Err>> for SessionGateService<S>
where
    S: Service<web::WebRequest<Err>, Response = web::WebResponse, Error = web::Error>,
    Err: web::ErrorRenderer,
{
    type Response = web::WebResponse;
    type Error = web::Error;

    ntex::forward_ready!(service);

    async fn call(
        &self,
        req: web::WebRequest<Err>,
        ctx: ServiceCtx<'_, Self>,
    ) -> Result<Self::Response, Self::Error> {
        if route_policy(req.method(), req.path()) == GateDecision::RequireSession {
            let authorization = req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let session = self.keys.session_from(authorization);
            if !session.is_authenticated() {
                info!("Rejected {} {}: no valid session", req.method(), req.path());
                let response = web::HttpResponse::Unauthorized()
                    .json(&ErrorBody { error: "Authentication required" });
                return Ok(req.into_response(response));
            }
        }

        ctx.call(&self.service, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_pass_unconditionally() {
        assert_eq!(route_policy(&Method::GET, "/api/posts"), GateDecision::Allow);
        assert_eq!(route_policy(&Method::GET, "/api/posts/42"), GateDecision::Allow);
        assert_eq!(route_policy(&Method::GET, "/api/auth/session"), GateDecision::Allow);
    }

    #[test]
    fn test_auth_subsystem_passes() {
        assert_eq!(route_policy(&Method::POST, "/api/auth/login"), GateDecision::Allow);
    }

    #[test]
    fn test_mutations_require_a_session() {
        assert_eq!(route_policy(&Method::POST, "/api/posts"), GateDecision::RequireSession);
        assert_eq!(route_policy(&Method::DELETE, "/api/posts"), GateDecision::RequireSession);
        assert_eq!(route_policy(&Method::PUT, "/api/posts/42"), GateDecision::RequireSession);
    }

    #[test]
    fn test_non_api_paths_are_not_covered() {
        assert_eq!(route_policy(&Method::POST, "/health"), GateDecision::Allow);
        assert_eq!(route_policy(&Method::DELETE, "/"), GateDecision::Allow);
    }
}
