//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses keyed by request path; unknown paths get 404.
//! Records the `User-Agent` of every request it sees.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Sleep before answering (to exercise client timeouts).
    pub delay: Option<Duration>,
}

impl Route {
    /// 200 response with the given Content-Type and an accurate Content-Length.
    pub fn ok(content_type: &str, body: &[u8]) -> Self {
        Route {
            status: "200 OK",
            headers: vec![
                ("Content-Type".into(), content_type.into()),
                ("Content-Length".into(), body.len().to_string()),
            ],
            body: body.to_vec(),
            delay: None,
        }
    }

    pub fn status(status: &'static str) -> Self {
        Route {
            status,
            headers: vec![("Content-Length".into(), "0".into())],
            body: Vec::new(),
            delay: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Route {
            status: "302 Found",
            headers: vec![
                ("Location".into(), location.into()),
                ("Content-Type".into(), "text/html".into()),
                ("Content-Length".into(), "0".into()),
            ],
            body: Vec::new(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct ImageServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let agents = Arc::clone(&user_agents);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let agents = Arc::clone(&agents);
            thread::spawn(move || handle(stream, &routes, &agents));
        }
    });
    ImageServer {
        base: format!("http://127.0.0.1:{}", port),
        user_agents,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    agents: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, user_agent) = parse_request(request);
    if let Some(ua) = user_agent {
        agents.lock().unwrap().push(ua.to_string());
    }

    let route = routes
        .get(path)
        .cloned()
        .unwrap_or_else(|| Route::status("404 Not Found"));
    if let Some(d) = route.delay {
        thread::sleep(d);
    }

    let mut response = format!("HTTP/1.1 {}\r\nConnection: close\r\n", route.status);
    for (name, value) in &route.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&route.body);
}

/// Returns (path, optional User-Agent) from the request head.
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut path = "";
    let mut user_agent = None;
    for (i, line) in request.lines().enumerate() {
        let line = line.trim();
        if i == 0 {
            path = line.split_whitespace().nth(1).unwrap_or("");
            continue;
        }
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (path, user_agent)
}
