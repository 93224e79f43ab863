use std::time::Duration;

use egui_kittest::Harness;
use userlist_business::BusinessConfig;
use userlist_ui::UserListApp;
use userlist_ui::state::State;
use userlist_ui::widgets::user_list_panel;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Steps frames while giving the fetch task time to run.
    pub async fn settle(&mut self) {
        self.harness.step();
        for _ in 0..10 {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.harness.step();
        }
    }
}

impl<'a> TestCtx<'a, State> {
    /// Panel harness backed by a server answering `/users` with `template`.
    #[allow(unused)]
    pub async fn new(template: ResponseTemplate) -> Self {
        let mock_server = serve(template).await;
        let state = State::test(users_url(&mock_server));
        Self::from_state(mock_server, state)
    }

    #[allow(unused)]
    pub fn from_state(mock_server: MockServer, state: State) -> Self {
        let harness = Harness::new_ui_state(
            |ui, state: &mut State| user_list_panel(ui, state),
            state,
        );
        Self {
            mock_server,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, UserListApp> {
    #[allow(unused)]
    pub async fn new_app(template: ResponseTemplate) -> Self {
        let mock_server = serve(template).await;
        let app = UserListApp::new(State::new(BusinessConfig::new(users_url(&mock_server))));
        let harness = Harness::new_eframe(|_| app);
        Self {
            mock_server,
            harness,
        }
    }
}

pub async fn serve(template: ResponseTemplate) -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .mount(&mock_server)
        .await;
    mock_server
}

pub fn users_url(mock_server: &MockServer) -> String {
    format!("{}/users", mock_server.uri())
}

#[allow(unused)]
pub fn leanne() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": { "city": "Gwenborough" },
        "phone": "1-770-736-8031",
        "website": "hildegard.org",
        "company": { "name": "Romaguera-Crona" }
    })
}

#[allow(unused)]
pub fn ervin() -> serde_json::Value {
    serde_json::json!({
        "id": 2,
        "name": "Ervin Howell",
        "username": "Antonette",
        "email": "Shanna@melissa.tv",
        "address": { "city": "Wisokyburgh" },
        "phone": "010-692-6593",
        "website": "anastasia.net",
        "company": { "name": "Deckow-Crist" }
    })
}

#[allow(unused)]
pub fn clementine() -> serde_json::Value {
    serde_json::json!({
        "id": 3,
        "name": "Clementine Bauch",
        "username": "Samantha",
        "email": "Nathan@yesenia.net",
        "address": { "city": "McKenziehaven" },
        "phone": "1-463-123-4447",
        "website": "ramiro.info",
        "company": { "name": "Romaguera-Jacobson" }
    })
}
