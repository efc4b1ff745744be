//! In-process stand-in for the task-manager API.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use httparse::Request;

/// One request as the server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub method: String,
    pub target: String,
    pub accept: Option<String>,
}

#[derive(Default)]
pub struct State {
    pub users: Vec<String>,
    pub tasks: Vec<String>,
    pub seen: Vec<Seen>,
    /// Status code for list responses.
    pub list_status: Option<u16>,
    /// Raw body returned for every list request instead of the collection.
    pub list_body: Option<String>,
    /// Ids added to the task collection after the first task listing.
    pub late_tasks: Vec<String>,
    /// Status code for every DELETE; the record is still removed.
    pub delete_status: Option<u16>,
}

pub struct MockApi {
    pub port: u16,
    pub state: Arc<Mutex<State>>,
    connections: Arc<AtomicUsize>,
}

impl MockApi {
    pub fn start(users: &[&str], tasks: &[&str]) -> Self {
        let state = State {
            users: users.iter().map(ToString::to_string).collect(),
            tasks: tasks.iter().map(ToString::to_string).collect(),
            ..State::default()
        };
        Self::with_state(state)
    }

    pub fn with_state(state: State) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let state = Arc::new(Mutex::new(state));

        let connections = Arc::new(AtomicUsize::new(0));

        let shared = Arc::clone(&state);
        let accepted = Arc::clone(&connections);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                accepted.fetch_add(1, Ordering::SeqCst);
                let shared = Arc::clone(&shared);
                thread::spawn(move || serve(stream, &shared));
            }
        });

        Self {
            port,
            state,
            connections,
        }
    }

    /// Sockets accepted so far.
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.state.lock().unwrap().seen.clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.seen()
            .into_iter()
            .filter(|s| s.method == "DELETE")
            .map(|s| s.target)
            .collect()
    }

    pub fn remaining(&self) -> (usize, usize) {
        let state = self.state.lock().unwrap();
        (state.users.len(), state.tasks.len())
    }
}

fn serve(mut stream: TcpStream, state: &Mutex<State>) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let mut headers = [httparse::EMPTY_HEADER; 32];
        let mut req = Request::new(&mut headers);
        match req.parse(&buffer) {
            Ok(httparse::Status::Complete(header_len)) => {
                let seen = Seen {
                    method: req.method.unwrap_or_default().to_string(),
                    target: req.path.unwrap_or_default().to_string(),
                    accept: req
                        .headers
                        .iter()
                        .find(|h| h.name.eq_ignore_ascii_case("accept"))
                        .map(|h| String::from_utf8_lossy(h.value).into_owned()),
                };
                buffer.drain(..header_len);

                let (status, body) = respond(&seen, &mut state.lock().unwrap());
                let response = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: keep-alive\r\n\r\n{body}",
                    body.len()
                );
                if stream.write_all(response.as_bytes()).is_err() {
                    return;
                }
            }
            Ok(httparse::Status::Partial) => match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            },
            Err(_) => return,
        }
    }
}

fn respond(seen: &Seen, state: &mut State) -> (u16, String) {
    state.seen.push(seen.clone());
    let path = seen.target.split('?').next().unwrap_or_default().to_string();

    match (seen.method.as_str(), path.as_str()) {
        ("GET", "/api/users" | "/api/tasks") => {
            let status = state.list_status.unwrap_or(200);
            if let Some(body) = &state.list_body {
                return (status, body.clone());
            }
            let ids = if path == "/api/users" {
                state.users.clone()
            } else {
                let ids = state.tasks.clone();
                let late = std::mem::take(&mut state.late_tasks);
                state.tasks.extend(late);
                ids
            };
            let data: Vec<String> = ids.iter().map(|id| format!(r#"{{"_id":"{id}"}}"#)).collect();
            (status, format!(r#"{{"message":"OK","data":[{}]}}"#, data.join(",")))
        }
        ("DELETE", p) => {
            let (collection, id) = if let Some(id) = p.strip_prefix("/api/users/") {
                (&mut state.users, id)
            } else if let Some(id) = p.strip_prefix("/api/tasks/") {
                (&mut state.tasks, id)
            } else {
                return (404, r#"{"message":"Not found","data":null}"#.to_string());
            };
            match collection.iter().position(|x| x == id) {
                Some(i) => {
                    collection.remove(i);
                    match state.delete_status {
                        Some(status) => (status, r#"{"message":"Error","data":null}"#.to_string()),
                        None => (200, r#"{"message":"Deleted","data":null}"#.to_string()),
                    }
                }
                None => (404, r#"{"message":"Not found","data":null}"#.to_string()),
            }
        }
        _ => (404, r#"{"message":"Not found","data":null}"#.to_string()),
    }
}
