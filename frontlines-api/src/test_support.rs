use crate::config::DATASET_ROUTE;
use crate::integrations::{CompanySource, LoadError};
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_trait::async_trait;
use shared_types::Company;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Seven companies named C1..C7, deliberately out of order.
pub const SAMPLE_JSON: &str = r#"[
    {"id": 3, "name": "C3", "industry": "Software", "country": "India", "state": "Karnataka",
     "city": "Bengaluru", "postalCode": "560001", "employeeCount": 300, "founded": 2013, "tagline": "Third"},
    {"id": 1, "name": "C1", "industry": "Fintech", "country": "India", "state": "Karnataka",
     "city": "Mysuru", "postalCode": "570001", "employeeCount": 100, "founded": 2011, "tagline": "First"},
    {"id": 7, "name": "C7", "industry": "Robotics", "country": "United States", "state": "California",
     "city": "San Jose", "postalCode": "95113", "employeeCount": 700, "founded": 2017, "tagline": "Seventh"},
    {"id": 2, "name": "C2", "industry": "Software", "country": "India", "state": "Maharashtra",
     "city": "Pune", "postalCode": "411001", "employeeCount": 200, "founded": 2012, "tagline": "Second"},
    {"id": 5, "name": "C5", "industry": "Healthcare", "country": "Germany", "state": "Bavaria",
     "city": "Munich", "postalCode": "80331", "employeeCount": 500, "founded": 2015, "tagline": "Fifth"},
    {"id": 4, "name": "C4", "industry": "Software", "country": "United States", "state": "Texas",
     "city": "Austin", "postalCode": "73301", "employeeCount": 400, "founded": 2014, "tagline": "Fourth"},
    {"id": 6, "name": "C6", "industry": "Logistics", "country": "Germany", "state": "Berlin",
     "city": "Berlin", "postalCode": "10115", "employeeCount": 600, "founded": 2016, "tagline": "Sixth"}
]"#;

pub fn sample_companies() -> Vec<Company> {
    serde_json::from_str(SAMPLE_JSON).unwrap()
}

/// Starts a throwaway server answering the dataset route with a fixed response.
pub async fn serve(status: StatusCode, body: &'static str) -> (String, ServerHandle) {
    let server = HttpServer::new(move || {
        App::new().route(
            DATASET_ROUTE,
            web::get().to(move || async move {
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (format!("http://{}{}", addr, DATASET_ROUTE), handle)
}

/// Returns queued responses in order, optionally after a delay, and counts calls.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<(Duration, Result<Vec<Company>, LoadError>)>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<Vec<Company>, LoadError>>) -> Self {
        Self::delayed(
            responses
                .into_iter()
                .map(|response| (Duration::ZERO, response))
                .collect(),
        )
    }

    pub fn delayed(responses: Vec<(Duration, Result<Vec<Company>, LoadError>)>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompanySource for ScriptedSource {
    async fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().unwrap().pop_front();

        match next {
            Some((delay, response)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => Err(LoadError::Transport("no scripted response".to_string())),
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
