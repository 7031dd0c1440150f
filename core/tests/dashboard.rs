//! Dashboard view scenarios driven by a scripted transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use spine_core::{
    ApiClient, ApiError, ClientConfig, DashboardState, DashboardView, HttpRequest, HttpResponse, MemorySessionStore,
    Session, SessionProvider, Transport,
};

const DASHBOARD_BODY: &str = r#"{"message":"ok","user_id":"u1","user_email":"a@b.com","stats":{"total_scans":3,"total_books":1,"pending_review":0}}"#;

struct ScriptedTransport {
    requests: Mutex<Vec<HttpRequest>>,
    response: HttpResponse,
}

impl ScriptedTransport {
    fn new(status: u16, status_text: &str, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: HttpResponse {
                status,
                status_text: status_text.to_string(),
                headers: Vec::new(),
                body: body.to_string(),
            },
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

fn client(sessions: MemorySessionStore, transport: Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::new(ClientConfig::default(), Arc::new(sessions), transport)
}

#[tokio::test]
async fn loaded_dashboard_shows_stat_tiles() {
    let transport = ScriptedTransport::new(200, "OK", DASHBOARD_BODY);
    let client = client(MemorySessionStore::signed_in(Session::new("tok")), transport.clone());

    let mut view = DashboardView::new("a@b.com");
    view.load(&client).await;

    let values: Vec<String> = view.stat_tiles().into_iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["3", "1", "0"]);
    assert!(view.error_notice().is_none());

    let page = view.render();
    assert!(page.contains("Total Scans"));
    assert!(page.contains("a@b.com"));
    assert!(!page.contains("Error loading dashboard"));

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://localhost:8000/api/user/dashboard");
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok"));
}

#[tokio::test]
async fn server_error_shows_notice_and_no_tiles() {
    let transport = ScriptedTransport::new(500, "Internal Server Error", "oops");
    let client = client(MemorySessionStore::signed_in(Session::new("tok")), transport.clone());

    let mut view = DashboardView::new("a@b.com");
    view.load(&client).await;

    assert!(matches!(view.state(), DashboardState::Failed(_)));
    assert!(view.stat_tiles().is_empty());
    let notice = view.error_notice().unwrap();
    assert!(notice.contains("Internal Server Error"));
    assert!(view.render().contains("Internal Server Error"));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn missing_session_fails_before_any_request() {
    let transport = ScriptedTransport::new(200, "OK", DASHBOARD_BODY);
    let client = client(MemorySessionStore::new(), transport.clone());

    let mut view = DashboardView::new("");
    view.load(&client).await;

    assert_eq!(view.state(), &DashboardState::Failed("No active session".to_string()));
    assert!(view.stat_tiles().is_empty());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn sign_out_clears_the_session() {
    let transport = ScriptedTransport::new(200, "OK", DASHBOARD_BODY);
    let client = client(MemorySessionStore::signed_in(Session::new("tok")), transport.clone());

    let view = DashboardView::new("a@b.com");
    view.sign_out(&client).await;

    assert!(client.sessions().get_session().await.is_none());
    assert_eq!(transport.request_count(), 0);
}
