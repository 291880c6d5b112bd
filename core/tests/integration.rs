//! Full CRUD lifecycle test against the live server.
//!
//! Starts the server on a random port, then exercises every client operation
//! over real HTTP using ureq.

use todo_core::{ClientError, HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoItem};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Status codes are returned as data rather than `Err`, so the client core
/// does all status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .unwrap_or_else(|e| panic!("{} {} failed: {e}", req.method.as_str(), req.path));

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers,
        body,
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_api::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn crud_lifecycle() {
    let client = TodoClient::new(&start_server());

    // Step 1: list is empty.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 2: create two todos.
    let req = client.build_create_todo(&TodoItem::new("Buy milk", false)).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.todo.name.as_deref(), Some("Buy milk"));
    assert!(!created.todo.is_complete);
    let id = created.todo.id;
    assert_eq!(created.location, Some(format!("/todos/{id}")));

    let req = client.build_create_todo(&TodoItem::new("Walk dog", false)).unwrap();
    let other = client.parse_create_todo(execute(req)).unwrap().todo;
    assert_ne!(other.id, id);

    // Step 3: get round-trips the create response.
    let fetched = client.parse_get_todo(execute(client.build_get_todo(id))).unwrap();
    assert_eq!(fetched, created.todo);

    // Step 4: create without a name is rejected.
    let req = client.build_create_todo(&TodoItem::default()).unwrap();
    let err = client.parse_create_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ClientError::BadRequest(_)));

    // Step 5: mark the first complete.
    let req = client
        .build_update_todo(id, &TodoItem::new("Buy oat milk", true))
        .unwrap();
    client.parse_update_todo(execute(req)).unwrap();

    // Step 6: only the first is completed; both are listed.
    let done = client
        .parse_list_completed(execute(client.build_list_completed()))
        .unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, id);
    assert_eq!(done[0].name.as_deref(), Some("Buy oat milk"));
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 2);

    // Step 7: delete returns the pre-deletion state.
    let deleted = client
        .parse_delete_todo(execute(client.build_delete_todo(id)))
        .unwrap();
    assert_eq!(deleted, done[0]);

    // Step 8: get, update and delete after delete are NotFound.
    let err = client.parse_get_todo(execute(client.build_get_todo(id))).unwrap_err();
    assert!(matches!(err, ClientError::NotFound));
    let req = client.build_update_todo(id, &TodoItem::new("again", false)).unwrap();
    let err = client.parse_update_todo(execute(req)).unwrap_err();
    assert!(matches!(err, ClientError::NotFound));
    let err = client
        .parse_delete_todo(execute(client.build_delete_todo(id)))
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound));

    // Step 9: the other todo is untouched.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos, vec![other]);
}
