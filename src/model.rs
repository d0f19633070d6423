use serde::{Deserialize, Deserializer};

/// Categorical employment type. Stored and compared by code; `label` is only
/// ever used for display so filter matching can never drift from the stored
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    Full,
    Part,
    Remote,
    Intern,
}

impl JobType {
    /// All types, in the order they appear in select controls.
    pub const ALL: [JobType; 4] = [
        JobType::Full,
        JobType::Part,
        JobType::Remote,
        JobType::Intern,
    ];

    pub fn from_code(code: &str) -> Option<JobType> {
        match code {
            "full" => Some(JobType::Full),
            "part" => Some(JobType::Part),
            "remote" => Some(JobType::Remote),
            "intern" => Some(JobType::Intern),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            JobType::Full => "full",
            JobType::Part => "part",
            JobType::Remote => "remote",
            JobType::Intern => "intern",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::Full => "Full-time",
            JobType::Part => "Part-time",
            JobType::Remote => "Remote",
            JobType::Intern => "Internship",
        }
    }
}

/// A job posting as returned by the list and detail endpoints.
///
/// One normalizing schema for the whole HTTP boundary: the server stores
/// salary as a string and omits fields on older records, so everything
/// lenient happens here and view code sees clean types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    /// Id of the user who created the posting.
    #[serde(default, rename = "user_id")]
    pub owner_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "de_job_type")]
    pub job_type: Option<JobType>,
    /// Yearly salary. Absent, null, or non-numeric values become 0.
    #[serde(default, deserialize_with = "de_salary")]
    pub salary: u64,
    #[serde(default)]
    pub description: String,
    /// Comma-separated skill names as entered by the posting's owner.
    #[serde(default)]
    pub skills: String,
}

impl Job {
    pub fn skill_list(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn de_job_type<'de, D>(deserializer: D) -> Result<Option<JobType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(JobType::from_code))
}

fn de_salary<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) if n.is_finite() && n > 0.0 => n as u64,
        Some(Raw::Text(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "abc-123",
            "user_id": "u-42",
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Berlin",
            "job_type": "full",
            "salary": "150000",
            "description": "Build things",
            "skills": "rust, sql,  networking"
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "abc-123");
        assert_eq!(job.owner_id, "u-42");
        assert_eq!(job.job_type, Some(JobType::Full));
        assert_eq!(job.salary, 150_000);
        assert_eq!(job.skill_list(), vec!["rust", "sql", "networking"]);
    }

    #[test]
    fn test_salary_accepts_number_and_string() {
        let as_number: Job = serde_json::from_str(r#"{"id":"a","salary":85000}"#).unwrap();
        let as_string: Job = serde_json::from_str(r#"{"id":"a","salary":"85000"}"#).unwrap();
        assert_eq!(as_number.salary, 85_000);
        assert_eq!(as_string.salary, 85_000);
    }

    #[test]
    fn test_salary_fallback_to_zero() {
        for body in [
            r#"{"id":"a"}"#,
            r#"{"id":"a","salary":null}"#,
            r#"{"id":"a","salary":"negotiable"}"#,
            r#"{"id":"a","salary":""}"#,
            r#"{"id":"a","salary":-5}"#,
        ] {
            let job: Job = serde_json::from_str(body).unwrap();
            assert_eq!(job.salary, 0, "body: {}", body);
        }
    }

    #[test]
    fn test_unknown_job_type_becomes_none() {
        let job: Job = serde_json::from_str(r#"{"id":"a","job_type":"gig"}"#).unwrap();
        assert_eq!(job.job_type, None);
        let job: Job = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert_eq!(job.job_type, None);
    }

    #[test]
    fn test_job_type_code_round_trip() {
        for ty in JobType::ALL {
            assert_eq!(JobType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(JobType::from_code(""), None);
        assert_eq!(JobType::from_code("Full-time"), None);
    }

    #[test]
    fn test_skill_list_empty_and_trailing_commas() {
        let job: Job = serde_json::from_str(r#"{"id":"a","skills":" , rust,, "}"#).unwrap();
        assert_eq!(job.skill_list(), vec!["rust"]);
        let job: Job = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert!(job.skill_list().is_empty());
    }
}
