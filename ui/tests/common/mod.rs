use std::time::Duration;

use egui_kittest::Harness;
use roster_business::BusinessConfig;
use roster_ui::RosterApp;
use roster_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    /// App backed by a mock `/users` endpoint answering with `template`.
    pub async fn with_response(template: ResponseTemplate) -> Self {
        Self::start(template, State::test).await
    }

    pub async fn with_users() -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(users_json())).await
    }

    /// Serves the sample users with filters debounced by `debounce_ms`.
    pub async fn with_users_debounced(debounce_ms: u64) -> Self {
        let template = ResponseTemplate::new(200).set_body_json(users_json());
        Self::start(template, |uri| {
            State::new(BusinessConfig::new(uri).with_filter_debounce_ms(debounce_ms))
        })
        .await
    }

    async fn start(template: ResponseTemplate, state: impl FnOnce(String) -> State) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(template)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = state(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Steps until the users request has been answered and rendered.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(Duration::from_millis(200)).await;
        for _ in 0..10 {
            self.harness.step();
        }
    }
}

pub fn users_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org"
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net"
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "phone": "1-463-123-4447",
            "website": "ramiro.info"
        }
    ])
}
