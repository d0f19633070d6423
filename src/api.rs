use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::model::Job;

/// Everything that can go wrong talking to the server, from the caller's
/// point of view. `Unauthorized` is special: any page receiving it drops the
/// session and returns to the login view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Not signed in")]
    Unauthorized,
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response from server: {0}")]
    BadPayload(String),
}

/// Fields of the job create/edit form, sent form-urlencoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Job type code ("full", "part", ...), empty when unset.
    pub job_type: String,
    pub salary: String,
    pub skills: String,
    pub description: String,
}

impl JobForm {
    fn pairs(&self) -> Vec<(&str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("company", self.company.as_str()),
            ("location", self.location.as_str()),
            ("job_type", self.job_type.as_str()),
            ("salary", self.salary.as_str()),
            ("skills", self.skills.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

// -- Auth --

pub async fn register(username: &str, usermail: &str, password: &str) -> Result<(), ApiError> {
    // The server registers this route as /singin.
    send_form(
        Request::post("/singin"),
        &[
            ("username", username),
            ("usermail", usermail),
            ("password", password),
        ],
    )
    .await
    .map(|_| ())
}

pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
    send_form(
        Request::post("/login"),
        &[("username", username), ("password", password)],
    )
    .await
    .map(|_| ())
}

/// Ask the server whether the auth cookie is still valid.
/// The 2xx body is the plain-text username.
pub async fn check_auth() -> Result<String, ApiError> {
    let response = send(Request::get("/checkauth")).await?;
    response
        .text()
        .await
        .map_err(|e| ApiError::BadPayload(e.to_string()))
}

pub async fn logout() -> Result<(), ApiError> {
    send(Request::post("/logout")).await.map(|_| ())
}

// -- Jobs --

pub async fn list_jobs() -> Result<Vec<Job>, ApiError> {
    fetch_job_list("/showjobs").await
}

pub async fn my_jobs() -> Result<Vec<Job>, ApiError> {
    fetch_job_list("/myjobs").await
}

pub async fn job_detail(id: &str) -> Result<Job, ApiError> {
    let response = send(Request::get(&format!("/job/{}", id))).await?;
    response
        .json::<Job>()
        .await
        .map_err(|_| ApiError::BadPayload("expected a job object".to_string()))
}

pub async fn create_job(form: &JobForm) -> Result<(), ApiError> {
    send_form(Request::post("/createjob"), &form.pairs())
        .await
        .map(|_| ())
}

pub async fn update_job(id: &str, form: &JobForm) -> Result<(), ApiError> {
    send_form(Request::put(&format!("/job/{}", id)), &form.pairs())
        .await
        .map(|_| ())
}

pub async fn delete_job(id: &str) -> Result<(), ApiError> {
    send(Request::delete(&format!("/job/{}", id)))
        .await
        .map(|_| ())
}

// -- Plumbing --

async fn fetch_job_list(path: &str) -> Result<Vec<Job>, ApiError> {
    let response = send(Request::get(path)).await?;
    // The server answers `null` for an empty store on some endpoints.
    match response.json::<Option<Vec<Job>>>().await {
        Ok(jobs) => Ok(jobs.unwrap_or_default()),
        Err(_) => Err(ApiError::BadPayload("expected a list of jobs".to_string())),
    }
}

/// Issue a request with no body. Cookies always ride along.
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

/// Issue a request with a form-urlencoded body, the only body format the
/// server accepts.
async fn send_form(builder: RequestBuilder, fields: &[(&str, &str)]) -> Result<Response, ApiError> {
    let response = builder
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encode_form(fields))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    let params = web_sys::UrlSearchParams::new().unwrap();
    for (key, value) in fields {
        params.append(key, value);
    }
    String::from(params.to_string())
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status: response.status(),
        message,
    })
}
