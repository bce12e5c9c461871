/// HTTP round-trip tests against a server on an ephemeral port
///
/// These spin up the real axum app and talk to it with a plain HTTP client,
/// covering the /graphql and /health routes end to end.

mod http_tests {
    use serde_json::{json, Value};
    use shelfql::schema::build_schema;
    use shelfql::server::make_app;
    use shelfql::store::{Author, Book, RecordStore, SeedData};
    use std::net::{SocketAddr, TcpListener};
    use std::sync::Arc;

    struct TestServer {
        handle: tokio::task::JoinHandle<()>,
        socket: SocketAddr,
    }

    impl TestServer {
        fn with_router(router: axum::Router) -> Self {
            let addr = SocketAddr::from(([127, 0, 0, 1], 0));
            let listener = TcpListener::bind(addr).unwrap();
            listener.set_nonblocking(true).unwrap();
            let socket = listener.local_addr().unwrap();

            let handle = tokio::spawn(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, router).await.unwrap();
            });

            Self { handle, socket }
        }

        fn url(&self, path: &str) -> String {
            let path = path.trim_start_matches('/');
            format!("http://localhost:{}/{}", self.socket.port(), path)
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }

    fn seeded_app() -> axum::Router {
        let store = RecordStore::from_seed(SeedData {
            authors: vec![Author {
                id: 1,
                name: "J.K. Rowling".to_string(),
            }],
            books: vec![Book {
                id: 1,
                name: "Harry Potter".to_string(),
                author_id: 1,
            }],
        });
        make_app(build_schema(Arc::new(store)))
    }

    #[tokio::test]
    async fn test_query_over_http() {
        let _ = tracing_subscriber::fmt::try_init();
        let server = TestServer::with_router(seeded_app());
        let client = reqwest::Client::new();

        let response: Value = client
            .post(server.url("/graphql"))
            .json(&json!({ "query": "{ books { id name author { name } } }" }))
            .send()
            .await
            .expect("Request should succeed")
            .json()
            .await
            .expect("Response should be JSON");

        assert_eq!(
            response["data"],
            json!({
                "books": [{
                    "id": 1,
                    "name": "Harry Potter",
                    "author": { "name": "J.K. Rowling" }
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_mutation_over_http() {
        let server = TestServer::with_router(seeded_app());
        let client = reqwest::Client::new();

        let response: Value = client
            .post(server.url("/graphql"))
            .json(&json!({
                "query": r#"mutation { addAuthor(name: "Brent Weeks") { id name } }"#
            }))
            .send()
            .await
            .expect("Request should succeed")
            .json()
            .await
            .expect("Response should be JSON");

        assert_eq!(
            response["data"],
            json!({ "addAuthor": { "id": 2, "name": "Brent Weeks" } })
        );
    }

    #[tokio::test]
    async fn test_duplicate_author_error_in_response_envelope() {
        let server = TestServer::with_router(seeded_app());
        let client = reqwest::Client::new();

        let mutation = json!({
            "query": r#"mutation { addAuthor(name: "J.K. Rowling") { id } }"#
        });
        let response: Value = client
            .post(server.url("/graphql"))
            .json(&mutation)
            .send()
            .await
            .expect("Request should succeed")
            .json()
            .await
            .expect("Response should be JSON");

        let message = response["errors"][0]["message"]
            .as_str()
            .expect("Error entry should be present");
        assert!(message.contains("Author already in database"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = TestServer::with_router(seeded_app());

        let body = reqwest::get(server.url("/health"))
            .await
            .expect("Request should succeed")
            .text()
            .await
            .expect("Response should have a body");

        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_playground_served_on_get() {
        let server = TestServer::with_router(seeded_app());

        let body = reqwest::get(server.url("/graphql"))
            .await
            .expect("Request should succeed")
            .text()
            .await
            .expect("Response should have a body");

        assert!(body.contains("GraphQL Playground"));
    }
}
